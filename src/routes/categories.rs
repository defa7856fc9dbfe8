use actix_web::{Responder, delete, get, post, web};

use crate::forms::categories::AddCategoryForm;
use crate::repository::DieselRepository;
use crate::routes::{created, error_response, ok, ok_message};
use crate::services::categories as category_service;

#[get("/admin/car/category")]
pub async fn list_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    match category_service::list_categories(repo.get_ref()) {
        Ok(categories) => ok(categories),
        Err(err) => error_response(err, "list car categories"),
    }
}

#[post("/admin/car/category/add")]
pub async fn add_category(
    form: web::Json<AddCategoryForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match category_service::create_category(repo.get_ref(), form.into_inner()) {
        Ok(category) => created(category, "Car category created successfully"),
        Err(err) => error_response(err, "create car category"),
    }
}

#[delete("/admin/car/category/{category_id:\\d+}")]
pub async fn delete_category(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match category_service::remove_category(repo.get_ref(), category_id.into_inner()) {
        Ok(()) => ok_message("Car category deleted successfully"),
        Err(err) => error_response(err, "delete car category"),
    }
}
