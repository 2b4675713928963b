//! OpenAPI document served at `/api-docs/openapi.json`.
//!
//! Request shapes are described by the `*Doc` structs below; they mirror the
//! JSON wire names, not the Rust field names.

use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeFormDoc {
    pub full_name: String,
    #[schema(example = "1990-01-31")]
    pub date_of_birth: String,
    pub gender: String,
    pub marital_status: String,
    pub nationality: Option<String>,
    pub contact_number: String,
    pub email_address: Option<String>,
    pub address: String,
    #[serde(rename = "employeeID")]
    pub employee_id: String,
    pub department: String,
    pub designation: String,
    pub pond_number: Option<String>,
    pub date_of_joining: String,
    pub employment_type: String,
    pub net_salary: f64,
    #[serde(rename = "Status")]
    pub status: String,
    pub education: String,
    /// Binary part; multipart only.
    #[schema(value_type = Option<String>, format = Binary)]
    pub photo: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub nid_photo: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub certificate_copy: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalaryDoc {
    pub date: Option<String>,
    #[serde(rename = "employeeID")]
    pub employee_id: Option<String>,
    pub full_name: Option<String>,
    pub department: Option<String>,
    pub salary_net: Option<f64>,
    pub present_count: Option<f64>,
    pub basic: Option<f64>,
    pub home_rent: Option<f64>,
    pub medical: Option<f64>,
    pub travel: Option<f64>,
    pub welfare: Option<f64>,
    pub hajira: Option<f64>,
    pub pf: Option<f64>,
    pub over_time: Option<f64>,
    pub eid_bonus: Option<f64>,
    pub adv_deduct: Option<f64>,
    pub absent: Option<f64>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PondDoc {
    pub name: String,
    pub area: f64,
    pub box_quantity: i32,
    pub employ: String,
    /// `Active` (default) or `Inactive`.
    pub status: Option<String>,
    pub pond_start: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDoc {
    pub product_code: Option<String>,
    pub product_name: Option<String>,
    pub category: Option<String>,
    pub unit_name: Option<String>,
    pub pcs_count: Option<i32>,
    pub serial_no: Option<String>,
    pub cost_price: Option<f64>,
    pub sale_price: Option<f64>,
    pub min_alert_qty: Option<f64>,
    pub status: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductLineDoc {
    pub product_name: String,
    pub quantity: f64,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductGroupDoc {
    pub category: String,
    pub product_entries: Vec<ProductLineDoc>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PondEntryDoc {
    pub pond_name: String,
    pub date: String,
    pub products: Vec<ProductGroupDoc>,
}

#[derive(Serialize, ToSchema)]
pub struct ProductsUpdateDoc {
    pub products: Vec<ProductGroupDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::employees::create,
        crate::routes::employees::upload,
        crate::routes::employees::list,
        crate::routes::employees::get,
        crate::routes::employees::update,
        crate::routes::employees::delete,
        crate::routes::salaries::create,
        crate::routes::salaries::list,
        crate::routes::salaries::get,
        crate::routes::salaries::update,
        crate::routes::salaries::delete,
        crate::routes::salaries::delete_by_date,
        crate::routes::ponds::create,
        crate::routes::ponds::list,
        crate::routes::ponds::get,
        crate::routes::ponds::update,
        crate::routes::ponds::delete,
        crate::routes::products::create,
        crate::routes::products::list,
        crate::routes::products::get,
        crate::routes::products::update,
        crate::routes::products::delete,
        crate::routes::pond_entries::create_batch,
        crate::routes::pond_entries::create_one,
        crate::routes::pond_entries::list,
        crate::routes::pond_entries::get,
        crate::routes::pond_entries::update_products,
    ),
    components(
        schemas(
            HealthResponse,
            EmployeeFormDoc,
            SalaryDoc,
            PondDoc,
            ProductDoc,
            ProductLineDoc,
            ProductGroupDoc,
            PondEntryDoc,
            ProductsUpdateDoc,
            crate::routes::salaries::DeleteByDateRequest,
            crate::routes::salaries::DeleteByDateReply,
        )
    ),
    tags(
        (name = "health"),
        (name = "employees"),
        (name = "salaries"),
        (name = "ponds"),
        (name = "products"),
        (name = "pond-entries")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_collection() {
        let doc = ApiDoc::openapi();
        for path in ["/employees/{id}", "/salaries/delete-by-date", "/api/ponds", "/api/products/{id}", "/api/pondEntries/one"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
