use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::employee::EmployeeCandidate;
use crate::store::EmployeeStore;

/// Route name used to build `Location` headers for created employees.
pub const EMPLOYEE_BY_ID: &str = "employee_by_id";

async fn simulate_latency(config: &AppConfig) {
    if !config.response_delay.is_zero() {
        tokio::time::sleep(config.response_delay).await;
    }
}

pub async fn get_employees(
    store: web::Data<EmployeeStore>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, AppError> {
    simulate_latency(&config).await;

    let employees = store.list()?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employee(
    store: web::Data<EmployeeStore>,
    config: web::Data<AppConfig>,
    id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    simulate_latency(&config).await;

    let id = id.into_inner();
    let employee = store.get(id).map_err(|err| {
        log::warn!("lookup of employee {} failed: {}", id, err);
        err
    })?;
    Ok(HttpResponse::Ok().json(employee))
}

// A missing or unparseable body arrives as `None` and is rejected by the store.
pub async fn create_employee(
    req: HttpRequest,
    store: web::Data<EmployeeStore>,
    config: web::Data<AppConfig>,
    candidate: Option<web::Json<EmployeeCandidate>>,
) -> Result<HttpResponse, AppError> {
    simulate_latency(&config).await;

    let employee = store.create(candidate.map(web::Json::into_inner))?;

    let location = req
        .url_for(EMPLOYEE_BY_ID, [employee.id.to_string()])
        .map_err(|err| AppError::InternalServerError(format!("cannot build location: {:?}", err)))?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location.to_string()))
        .json(employee))
}

pub async fn update_employee(
    store: web::Data<EmployeeStore>,
    config: web::Data<AppConfig>,
    id: web::Path<i32>,
    candidate: Option<web::Json<EmployeeCandidate>>,
) -> Result<HttpResponse, AppError> {
    simulate_latency(&config).await;

    match store.update(id.into_inner(), candidate.map(web::Json::into_inner)) {
        Ok(()) => Ok(HttpResponse::NoContent().finish()),
        Err(AppError::NotFound(_)) => Ok(HttpResponse::NotFound().finish()),
        Err(err) => Err(err),
    }
}

pub async fn delete_employee(
    store: web::Data<EmployeeStore>,
    config: web::Data<AppConfig>,
    id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    simulate_latency(&config).await;

    let id = id.into_inner();
    match store.delete(id) {
        Ok(()) => Ok(HttpResponse::Ok().finish()),
        Err(AppError::NotFound(_)) => {
            log::warn!("delete of employee {} failed: not found", id);
            Ok(HttpResponse::NotFound().finish())
        }
        Err(err) => Err(err),
    }
}
