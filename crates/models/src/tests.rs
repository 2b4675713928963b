use std::collections::HashMap;

use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel};
use serde_json::json;

use crate::db::{connect_with_config, DatabaseConfig};
use crate::errors::ModelError;
use crate::{employee, pond, pond_entry, product, salary};

fn full_employee_json() -> serde_json::Value {
    json!({
        "fullName": "Rahim Uddin",
        "dateOfBirth": "1990-02-14",
        "gender": "Male",
        "maritalStatus": "Married",
        "contactNumber": 1712345678,
        "address": "Khulna",
        "employeeID": "EMP-001",
        "department": "Hatchery",
        "designation": "Supervisor",
        "dateOfJoining": "2021-07-01T00:00:00.000Z",
        "employmentType": "Full-time",
        "netSalary": "18000",
        "Status": "Active",
        "education": "HSC"
    })
}

#[test]
fn employee_json_is_coerced_and_validated() {
    let input: employee::EmployeeInput = serde_json::from_value(full_employee_json()).unwrap();
    assert!(input.has_import_essentials());
    let m = input.into_model().unwrap();
    assert_eq!(m.contact_number, "1712345678");
    assert_eq!(m.net_salary, 18000.0);
    assert_eq!(m.date_of_joining.to_string(), "2021-07-01");
    assert!(m.photo.is_none());
}

#[test]
fn employee_serializes_with_wire_names() {
    let input: employee::EmployeeInput = serde_json::from_value(full_employee_json()).unwrap();
    let v = serde_json::to_value(input.into_model().unwrap()).unwrap();
    assert_eq!(v["employeeID"], "EMP-001");
    assert_eq!(v["Status"], "Active");
    assert_eq!(v["dateOfBirth"], "1990-02-14");
    assert!(v.get("employee_id").is_none());
}

#[test]
fn employee_missing_required_field_is_rejected() {
    let mut body = full_employee_json();
    body.as_object_mut().unwrap().remove("designation");
    let input: employee::EmployeeInput = serde_json::from_value(body).unwrap();
    match input.into_model() {
        Err(ModelError::Validation(msg)) => assert!(msg.contains("designation")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn import_essentials_require_name_birth_and_contact() {
    let input: employee::EmployeeInput =
        serde_json::from_value(json!({"fullName": "A", "dateOfBirth": "2000-01-01"})).unwrap();
    assert!(!input.has_import_essentials());
}

#[test]
fn employee_form_fields_are_trimmed_and_parsed() {
    let mut fields = HashMap::new();
    fields.insert("fullName".to_string(), "  Karim ".to_string());
    fields.insert("netSalary".to_string(), "12500.5".to_string());
    fields.insert("nationality".to_string(), "".to_string());
    fields.insert("Status".to_string(), "Probation".to_string());
    let input = employee::EmployeeInput::from_form(&fields).unwrap();
    assert_eq!(input.full_name.as_deref(), Some("Karim"));
    assert_eq!(input.net_salary, Some(12500.5));
    assert!(input.nationality.is_none());
    assert_eq!(input.status.as_deref(), Some("Probation"));

    fields.insert("netSalary".to_string(), "lots".to_string());
    assert!(employee::EmployeeInput::from_form(&fields).is_err());
}

#[test]
fn attachment_fields_map_to_form_names() {
    for f in employee::AttachmentField::ALL {
        assert_eq!(employee::AttachmentField::from_form_name(f.form_name()), Some(f));
    }
    assert_eq!(employee::AttachmentField::from_form_name("resume"), None);
}

#[test]
fn pond_status_defaults_to_active() {
    let input: pond::PondInput = serde_json::from_value(json!({
        "name": "PondA", "area": 1.5, "boxQuantity": 12, "employ": "Rahim", "pondStart": "2024-01-10"
    }))
    .unwrap();
    let m = input.into_model().unwrap();
    assert_eq!(m.status, pond::PondStatus::Active);
    assert_eq!(serde_json::to_value(&m).unwrap()["employ"], "Rahim");
}

#[test]
fn pond_rejects_unknown_status_and_missing_area() {
    let bad_status: pond::PondInput = serde_json::from_value(json!({
        "name": "PondA", "area": 1.5, "boxQuantity": 12, "employ": "Rahim",
        "pondStart": "2024-01-10", "status": "Drained"
    }))
    .unwrap();
    assert!(bad_status.into_model().is_err());

    let no_area: pond::PondInput = serde_json::from_value(json!({
        "name": "PondA", "boxQuantity": 12, "employ": "Rahim", "pondStart": "2024-01-10"
    }))
    .unwrap();
    assert!(no_area.into_model().is_err());
}

#[test]
fn pond_entry_requires_line_quantity() {
    let input: pond_entry::PondEntryInput = serde_json::from_value(json!({
        "pondName": "PondA",
        "date": "2024-05-01",
        "products": [{"category": "Feed", "productEntries": [{"productName": "Pellet"}]}]
    }))
    .unwrap();
    match input.into_model() {
        Err(ModelError::Validation(msg)) => assert!(msg.contains("quantity")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn pond_entry_keeps_nested_structure_and_date_verbatim() {
    let input: pond_entry::PondEntryInput = serde_json::from_value(json!({
        "pondName": "PondA",
        "date": "2024-05-01",
        "products": [
            {"category": "Feed", "productEntries": [{"productName": "Pellet", "quantity": 3}]},
            {"category": "Medicine", "productEntries": []}
        ]
    }))
    .unwrap();
    let m = input.into_model().unwrap();
    assert_eq!(m.date, "2024-05-01");
    assert_eq!(m.products.0.len(), 2);
    assert_eq!(m.products.0[0].product_entries[0].quantity, 3.0);
    let v = serde_json::to_value(&m).unwrap();
    assert_eq!(v["products"][0]["productEntries"][0]["productName"], "Pellet");
}

#[test]
fn salary_replace_keeps_identity() {
    let original = salary::SalaryInput { basic: Some(100.0), ..Default::default() }.into_model();
    let mut am = original.clone().into_active_model();
    salary::SalaryInput { date: Some("2024-06-01".into()), ..Default::default() }.replace_into(&mut am);
    assert_eq!(am.id.clone().unwrap(), original.id);
    assert_eq!(am.entry_date.clone().unwrap(), original.entry_date);
    assert_eq!(am.basic.clone().unwrap(), None);
    assert_eq!(am.date.clone().unwrap().as_deref(), Some("2024-06-01"));
}

#[tokio::test]
async fn entities_round_trip_through_sqlite() -> anyhow::Result<()> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;

    let entry: pond_entry::PondEntryInput = serde_json::from_value(json!({
        "pondName": "PondB",
        "date": "2024-05-02",
        "products": [{"category": "Fish", "productEntries": [{"productName": "Tilapia", "quantity": 40.5}]}]
    }))?;
    let entry = entry.into_model()?;
    let saved = entry.clone().into_active_model().reset_all().insert(&db).await?;
    assert_eq!(saved.id, entry.id);
    assert_eq!(saved.pond_name, "PondB");
    assert_eq!(saved.products, entry.products);

    let p = product::ProductInput { product_name: Some("Pellet".into()), pcs_count: Some(20), ..Default::default() }
        .into_model();
    product::Entity::insert(p.clone().into_active_model().reset_all()).exec(&db).await?;
    let found = product::Entity::find_by_id(p.id).one(&db).await?;
    assert_eq!(found, Some(p));
    Ok(())
}
