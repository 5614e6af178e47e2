use crate::api::attendance;
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    // GET /?year=2024&month=3
    cfg.service(web::resource("/").route(web::get().to(attendance::attendance_view)));
}
