use chrono::Utc;
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::coerce;

/// One payroll line. Nothing is mandatory; `date` is kept exactly as sent.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "salary")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub date: Option<String>,
    #[serde(rename = "employeeID")]
    pub employee_id: Option<String>,
    pub full_name: Option<String>,
    pub department: Option<String>,
    #[serde(rename = "salaryNet")]
    pub net_salary: Option<f64>,
    pub present_count: Option<f64>,
    pub basic: Option<f64>,
    #[serde(rename = "homeRent")]
    pub house_rent: Option<f64>,
    pub medical: Option<f64>,
    pub travel: Option<f64>,
    pub welfare: Option<f64>,
    #[serde(rename = "hajira")]
    pub attendance_bonus: Option<f64>,
    #[serde(rename = "pf")]
    pub provident_fund: Option<f64>,
    #[serde(rename = "overTime")]
    pub overtime: Option<f64>,
    #[serde(rename = "eidBonus")]
    pub bonus: Option<f64>,
    #[serde(rename = "advDeduct")]
    pub advance_deduction: Option<f64>,
    #[serde(rename = "absent")]
    pub absent_count: Option<f64>,
    pub entry_date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryInput {
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub date: Option<String>,
    #[serde(default, rename = "employeeID", deserialize_with = "coerce::opt_string")]
    pub employee_id: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub department: Option<String>,
    #[serde(default, rename = "salaryNet", deserialize_with = "coerce::opt_f64")]
    pub net_salary: Option<f64>,
    #[serde(default, deserialize_with = "coerce::opt_f64")]
    pub present_count: Option<f64>,
    #[serde(default, deserialize_with = "coerce::opt_f64")]
    pub basic: Option<f64>,
    #[serde(default, rename = "homeRent", deserialize_with = "coerce::opt_f64")]
    pub house_rent: Option<f64>,
    #[serde(default, deserialize_with = "coerce::opt_f64")]
    pub medical: Option<f64>,
    #[serde(default, deserialize_with = "coerce::opt_f64")]
    pub travel: Option<f64>,
    #[serde(default, deserialize_with = "coerce::opt_f64")]
    pub welfare: Option<f64>,
    #[serde(default, rename = "hajira", deserialize_with = "coerce::opt_f64")]
    pub attendance_bonus: Option<f64>,
    #[serde(default, rename = "pf", deserialize_with = "coerce::opt_f64")]
    pub provident_fund: Option<f64>,
    #[serde(default, rename = "overTime", deserialize_with = "coerce::opt_f64")]
    pub overtime: Option<f64>,
    #[serde(default, rename = "eidBonus", deserialize_with = "coerce::opt_f64")]
    pub bonus: Option<f64>,
    #[serde(default, rename = "advDeduct", deserialize_with = "coerce::opt_f64")]
    pub advance_deduction: Option<f64>,
    #[serde(default, rename = "absent", deserialize_with = "coerce::opt_f64")]
    pub absent_count: Option<f64>,
}

impl SalaryInput {
    /// New record stamped with the current time.
    pub fn into_model(self) -> Model {
        Model {
            id: Uuid::new_v4(),
            date: self.date,
            employee_id: self.employee_id,
            full_name: self.full_name,
            department: self.department,
            net_salary: self.net_salary,
            present_count: self.present_count,
            basic: self.basic,
            house_rent: self.house_rent,
            medical: self.medical,
            travel: self.travel,
            welfare: self.welfare,
            attendance_bonus: self.attendance_bonus,
            provident_fund: self.provident_fund,
            overtime: self.overtime,
            bonus: self.bonus,
            advance_deduction: self.advance_deduction,
            absent_count: self.absent_count,
            entry_date: Utc::now().into(),
        }
    }

    /// Full replace of every payload column; id and entry date are kept.
    pub fn replace_into(self, am: &mut ActiveModel) {
        am.date = Set(self.date);
        am.employee_id = Set(self.employee_id);
        am.full_name = Set(self.full_name);
        am.department = Set(self.department);
        am.net_salary = Set(self.net_salary);
        am.present_count = Set(self.present_count);
        am.basic = Set(self.basic);
        am.house_rent = Set(self.house_rent);
        am.medical = Set(self.medical);
        am.travel = Set(self.travel);
        am.welfare = Set(self.welfare);
        am.attendance_bonus = Set(self.attendance_bonus);
        am.provident_fund = Set(self.provident_fund);
        am.overtime = Set(self.overtime);
        am.bonus = Set(self.bonus);
        am.advance_deduction = Set(self.advance_deduction);
        am.absent_count = Set(self.absent_count);
    }
}
