use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::coerce::{self, required};
use crate::dates::required_day;
use crate::errors::ModelError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum PondStatus {
    #[default]
    #[sea_orm(string_value = "Active")]
    Active,
    #[sea_orm(string_value = "Inactive")]
    Inactive,
}

impl PondStatus {
    pub fn parse(raw: &str) -> Result<Self, ModelError> {
        match raw.trim() {
            "Active" => Ok(Self::Active),
            "Inactive" => Ok(Self::Inactive),
            other => Err(ModelError::Validation(format!(
                "status must be Active or Inactive, got {other:?}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pond")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub area: f64,
    pub box_quantity: i32,
    #[serde(rename = "employ")]
    pub assigned_employee: String,
    pub status: PondStatus,
    pub pond_start: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PondInput {
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_f64")]
    pub area: Option<f64>,
    #[serde(default, deserialize_with = "coerce::opt_i32")]
    pub box_quantity: Option<i32>,
    #[serde(default, rename = "employ", deserialize_with = "coerce::opt_string")]
    pub assigned_employee: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub pond_start: Option<String>,
}

/// Checked pond fields shared by create and update.
struct ValidPond {
    name: String,
    area: f64,
    box_quantity: i32,
    assigned_employee: String,
    /// `None` when the payload left it out.
    status: Option<PondStatus>,
    pond_start: Date,
}

impl PondInput {
    fn validate(self) -> Result<ValidPond, ModelError> {
        let status = self.status.as_deref().map(PondStatus::parse).transpose()?;
        Ok(ValidPond {
            name: required(self.name, "name")?,
            area: self.area.ok_or_else(|| ModelError::missing("area"))?,
            box_quantity: self.box_quantity.ok_or_else(|| ModelError::missing("boxQuantity"))?,
            assigned_employee: required(self.assigned_employee, "employ")?,
            status,
            pond_start: required_day(self.pond_start, "pondStart")?,
        })
    }

    pub fn into_model(self) -> Result<Model, ModelError> {
        let v = self.validate()?;
        Ok(Model {
            id: Uuid::new_v4(),
            name: v.name,
            area: v.area,
            box_quantity: v.box_quantity,
            assigned_employee: v.assigned_employee,
            status: v.status.unwrap_or_default(),
            pond_start: v.pond_start,
        })
    }

    /// Replace the editable columns after the same checks as create. An
    /// omitted status keeps the stored one.
    pub fn replace_into(self, am: &mut ActiveModel) -> Result<(), ModelError> {
        let v = self.validate()?;
        am.name = Set(v.name);
        am.area = Set(v.area);
        am.box_quantity = Set(v.box_quantity);
        am.assigned_employee = Set(v.assigned_employee);
        if let Some(status) = v.status {
            am.status = Set(status);
        }
        am.pond_start = Set(v.pond_start);
        Ok(())
    }
}
