use serde::Serialize;

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
    pub service: &'static str,
}
