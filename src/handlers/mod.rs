pub mod employee;

use actix_web::web;

use crate::errors::AppError;
use crate::utils::validation::INVALID_EMPLOYEE_DATA;

/// Registers the employee routes. Shared state (`EmployeeStore`,
/// `AppConfig`) must be supplied by the caller through `app_data`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(|err, _req| {
        log::debug!("bad path parameter: {}", err);
        AppError::InvalidInput(INVALID_EMPLOYEE_DATA.to_string()).into()
    }))
    .service(
        web::resource("/employees")
            .route(web::get().to(employee::get_employees))
            .route(web::post().to(employee::create_employee)),
    )
    .service(
        web::resource("/employees/{id}")
            .name(employee::EMPLOYEE_BY_ID)
            .route(web::get().to(employee::get_employee))
            .route(web::put().to(employee::update_employee))
            .route(web::delete().to(employee::delete_employee)),
    );
}
