use std::net::SocketAddr;

use chrono::{Duration, Local};
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use configs::DatabaseConfig;

struct TestApp {
    base_url: String,
    client: reqwest::Client,
}

impl TestApp {
    fn url(&self, path: &str) -> String { format!("{}{}", self.base_url, path) }

    async fn post(&self, path: &str, body: Value) -> anyhow::Result<(HttpStatusCode, Value)> {
        let res = self.client.post(self.url(path)).json(&body).send().await?;
        Ok((res.status(), res.json().await?))
    }

    async fn put(&self, path: &str, body: Value) -> anyhow::Result<(HttpStatusCode, Value)> {
        let res = self.client.put(self.url(path)).json(&body).send().await?;
        Ok((res.status(), res.json().await?))
    }

    async fn get(&self, path: &str) -> anyhow::Result<(HttpStatusCode, Value)> {
        let res = self.client.get(self.url(path)).send().await?;
        Ok((res.status(), res.json().await?))
    }

    async fn delete(&self, path: &str) -> anyhow::Result<(HttpStatusCode, Value)> {
        let res = self.client.delete(self.url(path)).send().await?;
        Ok((res.status(), res.json().await?))
    }
}

/// Fresh in-memory database per test, served on an ephemeral port.
async fn start_server() -> anyhow::Result<TestApp> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..DatabaseConfig::default() };
    let db = server::prepare_db(&cfg).await?;
    let app = server::build_app(db);

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url: format!("http://{}", addr), client: reqwest::Client::new() })
}

fn day(offset: i64) -> String {
    (Local::now().date_naive() + Duration::days(offset)).format("%Y-%m-%d").to_string()
}

fn today() -> String { day(0) }

/// Create a contrato starting on the current local day, retrying once if the
/// server's date moved past midnight after the client computed it.
async fn post_starting_today(app: &TestApp, empresa_id: i64, servicio_id: i64) -> anyhow::Result<(HttpStatusCode, Value)> {
    let body = |fecha: String| json!({"empresa_id": empresa_id, "servicio_id": servicio_id, "fecha_inicio": fecha});
    let (status, res) = app.post("/api/contratos", body(today())).await?;
    if status == HttpStatusCode::BAD_REQUEST && res["error"] == "La fecha de inicio no puede ser anterior a hoy" {
        return app.post("/api/contratos", body(today())).await;
    }
    Ok((status, res))
}

fn acme() -> Value {
    json!({"nombre": "ACME", "direccion": "Calle 1", "telefono": "600", "email": "a@b.com"})
}

async fn seed(app: &TestApp) -> anyhow::Result<(i64, i64)> {
    let (status, empresa) = app.post("/api/empresas", acme()).await?;
    assert_eq!(status, HttpStatusCode::CREATED);
    let (status, servicio) = app
        .post("/api/servicios", json!({"nombre": "Limpieza", "precio_base": 100, "duracion_horas": 2}))
        .await?;
    assert_eq!(status, HttpStatusCode::CREATED);
    Ok((empresa["id"].as_i64().unwrap(), servicio["id"].as_i64().unwrap()))
}

#[tokio::test]
async fn index_and_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (status, body) = app.get("/").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(body["message"], "API de Servicios de Limpieza para Empresas");
    assert_eq!(body["version"], "1.0");

    let (status, body) = app.get("/health").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn openapi_document_is_served() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (status, body) = app.get("/api-docs/openapi.json").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert!(body["paths"]["/api/contratos"].is_object());
    Ok(())
}

#[tokio::test]
async fn empresa_crud_flow() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (status, created) = app.post("/api/empresas", acme()).await?;
    assert_eq!(status, HttpStatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();

    let (status, list) = app.get("/api/empresas").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(list.as_array().map(Vec::len), Some(1));

    let (status, updated) = app.put(&format!("/api/empresas/{id}"), json!({"telefono": "699"})).await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(updated["telefono"], "699");
    assert_eq!(updated["nombre"], "ACME");

    let (status, body) = app.delete(&format!("/api/empresas/{id}")).await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(body["message"], "Empresa eliminada correctamente");

    let (status, body) = app.get(&format!("/api/empresas/{id}")).await?;
    assert_eq!(status, HttpStatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Empresa no encontrada");
    Ok(())
}

#[tokio::test]
async fn invalid_email_is_bad_request() -> anyhow::Result<()> {
    let app = start_server().await?;
    let mut body = acme();
    body["email"] = json!("no-at-sign");
    let (status, err) = app.post("/api/empresas", body).await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    assert_eq!(err["error"], "El email debe ser válido");
    Ok(())
}

#[tokio::test]
async fn malformed_json_is_bad_request() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = app
        .client
        .post(app.url("/api/servicios"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert!(body["error"].is_string());
    Ok(())
}

#[tokio::test]
async fn contrato_defaults_price_and_embeds_parties() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (empresa_id, servicio_id) = seed(&app).await?;

    let (status, contrato) = post_starting_today(&app, empresa_id, servicio_id).await?;
    assert_eq!(status, HttpStatusCode::CREATED);
    assert_eq!(contrato["precio_final"].as_f64(), Some(100.0));
    assert_eq!(contrato["estado"], "activo");
    assert!(contrato["fecha_fin"].is_null());
    assert_eq!(contrato["empresa"]["nombre"], "ACME");
    assert_eq!(contrato["servicio"]["nombre"], "Limpieza");

    let (status, list) = app.get("/api/contratos").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(list[0]["servicio"]["precio_base"].as_f64(), Some(100.0));
    Ok(())
}

#[tokio::test]
async fn contrato_date_rules() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (empresa_id, servicio_id) = seed(&app).await?;
    let past = day(-2);
    let inicio = day(10);

    let (status, err) = app
        .post("/api/contratos", json!({"empresa_id": empresa_id, "servicio_id": servicio_id, "fecha_inicio": past}))
        .await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    assert_eq!(err["error"], "La fecha de inicio no puede ser anterior a hoy");

    let (status, err) = app
        .post("/api/contratos", json!({"empresa_id": empresa_id, "servicio_id": servicio_id, "fecha_inicio": "15/06/2030"}))
        .await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    assert_eq!(err["error"], "La fecha de inicio debe tener formato YYYY-MM-DD");

    let (_, contrato) = app
        .post("/api/contratos", json!({"empresa_id": empresa_id, "servicio_id": servicio_id, "fecha_inicio": inicio}))
        .await?;
    let id = contrato["id"].as_i64().unwrap();

    let (status, err) = app.put(&format!("/api/contratos/{id}"), json!({"fecha_fin": day(9)})).await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    assert_eq!(err["error"], "La fecha de fin debe ser posterior a la fecha de inicio");

    let (status, updated) = app
        .put(&format!("/api/contratos/{id}"), json!({"fecha_fin": inicio, "estado": "finalizado"}))
        .await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(updated["fecha_fin"], inicio);
    assert_eq!(updated["estado"], "finalizado");
    Ok(())
}

#[tokio::test]
async fn contrato_with_unknown_parent_is_rejected() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (_, servicio_id) = seed(&app).await?;
    let (status, err) = app
        .post("/api/contratos", json!({"empresa_id": 999, "servicio_id": servicio_id, "fecha_inicio": day(3)}))
        .await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    assert_eq!(err["error"], "La empresa especificada no existe");

    let (status, err) = app.delete("/api/contratos/42").await?;
    assert_eq!(status, HttpStatusCode::NOT_FOUND);
    assert_eq!(err["error"], "Contrato no encontrado");
    Ok(())
}

#[tokio::test]
async fn deleting_servicio_cascades_to_contratos() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (empresa_id, servicio_id) = seed(&app).await?;
    let (status, _) = app
        .post("/api/contratos", json!({"empresa_id": empresa_id, "servicio_id": servicio_id, "fecha_inicio": day(3), "precio_final": 80}))
        .await?;
    assert_eq!(status, HttpStatusCode::CREATED);

    let (status, body) = app.delete(&format!("/api/servicios/{servicio_id}")).await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(body["message"], "Servicio eliminado correctamente");

    let (_, list) = app.get("/api/contratos").await?;
    assert_eq!(list.as_array().map(Vec::len), Some(0));
    let (_, empresas) = app.get("/api/empresas").await?;
    assert_eq!(empresas.as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn non_integer_id_is_json_not_found() -> anyhow::Result<()> {
    let app = start_server().await?;
    for path in ["/api/empresas/abc", "/api/servicios/1.5", "/api/contratos/99999999999"] {
        let res = app.client.get(app.url(path)).send().await?;
        assert_eq!(res.status(), HttpStatusCode::NOT_FOUND, "{path}");
        let content_type = res
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("application/json"), "{path}: {content_type}");
        let body: Value = res.json().await?;
        assert!(body["error"].is_string(), "{path}");
    }

    let (status, body) = app.delete("/api/contratos/abc").await?;
    assert_eq!(status, HttpStatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
    Ok(())
}
