use chrono::Utc;
use sea_orm::{entity::prelude::*, FromJsonQueryResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::coerce::{self, required};
use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pond_entry")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub pond_name: String,
    /// Stored verbatim; filtered reads compare it to a `yyyy-mm-dd` day.
    pub date: String,
    pub entry_time: DateTimeWithTimeZone,
    #[sea_orm(column_type = "Json")]
    pub products: ProductGroups,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Ordered product categories logged for one pond on one day.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct ProductGroups(pub Vec<ProductGroup>);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductGroup {
    pub category: String,
    pub product_entries: Vec<ProductLine>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductLine {
    pub product_name: String,
    pub quantity: f64,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductLineInput {
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_f64")]
    pub quantity: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductGroupInput {
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub category: Option<String>,
    #[serde(default)]
    pub product_entries: Vec<ProductLineInput>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PondEntryInput {
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub pond_name: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub date: Option<String>,
    #[serde(default)]
    pub products: Vec<ProductGroupInput>,
}

/// Body of a products-only update.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProductsUpdate {
    #[serde(default)]
    pub products: Option<Vec<ProductGroupInput>>,
}

pub fn validate_products(groups: Vec<ProductGroupInput>) -> Result<ProductGroups, ModelError> {
    let mut out = Vec::with_capacity(groups.len());
    for (gi, group) in groups.into_iter().enumerate() {
        let category = required(group.category, &format!("products[{gi}].category"))?;
        let mut lines = Vec::with_capacity(group.product_entries.len());
        for (li, line) in group.product_entries.into_iter().enumerate() {
            let at = format!("products[{gi}].productEntries[{li}]");
            lines.push(ProductLine {
                product_name: required(line.product_name, &format!("{at}.productName"))?,
                quantity: line.quantity.ok_or_else(|| ModelError::missing(&format!("{at}.quantity")))?,
            });
        }
        out.push(ProductGroup { category, product_entries: lines });
    }
    Ok(ProductGroups(out))
}

impl PondEntryInput {
    pub fn into_model(self) -> Result<Model, ModelError> {
        Ok(Model {
            id: Uuid::new_v4(),
            pond_name: required(self.pond_name, "pondName")?,
            date: required(self.date, "date")?,
            entry_time: Utc::now().into(),
            products: validate_products(self.products)?,
        })
    }
}
