use axum::Json;

use crate::serializers::health::HealthOut;

pub async fn health() -> Json<HealthOut> {
    Json(HealthOut { ok: true, service: "cardex" })
}
