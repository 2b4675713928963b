use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::coerce;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
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

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub product_code: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub unit_name: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_i32")]
    pub pcs_count: Option<i32>,
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub serial_no: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_f64")]
    pub cost_price: Option<f64>,
    #[serde(default, deserialize_with = "coerce::opt_f64")]
    pub sale_price: Option<f64>,
    #[serde(default, deserialize_with = "coerce::opt_f64")]
    pub min_alert_qty: Option<f64>,
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub status: Option<String>,
}

impl ProductInput {
    pub fn into_model(self) -> Model {
        Model {
            id: Uuid::new_v4(),
            product_code: self.product_code,
            product_name: self.product_name,
            category: self.category,
            unit_name: self.unit_name,
            pcs_count: self.pcs_count,
            serial_no: self.serial_no,
            cost_price: self.cost_price,
            sale_price: self.sale_price,
            min_alert_qty: self.min_alert_qty,
            status: self.status,
        }
    }

    pub fn merge_into(self, am: &mut ActiveModel) {
        if let Some(v) = self.product_code { am.product_code = Set(Some(v)); }
        if let Some(v) = self.product_name { am.product_name = Set(Some(v)); }
        if let Some(v) = self.category { am.category = Set(Some(v)); }
        if let Some(v) = self.unit_name { am.unit_name = Set(Some(v)); }
        if let Some(v) = self.pcs_count { am.pcs_count = Set(Some(v)); }
        if let Some(v) = self.serial_no { am.serial_no = Set(Some(v)); }
        if let Some(v) = self.cost_price { am.cost_price = Set(Some(v)); }
        if let Some(v) = self.sale_price { am.sale_price = Set(Some(v)); }
        if let Some(v) = self.min_alert_qty { am.min_alert_qty = Set(Some(v)); }
        if let Some(v) = self.status { am.status = Set(Some(v)); }
    }
}
