use std::collections::HashMap;

use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::coerce::{self, required};
use crate::dates::required_day;
use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub full_name: String,
    pub date_of_birth: Date,
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
    pub date_of_joining: Date,
    pub employment_type: String,
    pub net_salary: f64,
    #[serde(rename = "Status")]
    pub status: String,
    pub education: String,
    pub photo: Option<String>,
    pub nid_photo: Option<String>,
    pub certificate_copy: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn set_attachment(&mut self, field: AttachmentField, path: String) {
        match field {
            AttachmentField::Photo => self.photo = Some(path),
            AttachmentField::NidPhoto => self.nid_photo = Some(path),
            AttachmentField::CertificateCopy => self.certificate_copy = Some(path),
        }
    }
}

/// Which file column an uploaded part belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttachmentField {
    Photo,
    NidPhoto,
    CertificateCopy,
}

impl AttachmentField {
    pub const ALL: [AttachmentField; 3] = [Self::Photo, Self::NidPhoto, Self::CertificateCopy];

    /// Multipart part name, identical to the JSON field name.
    pub fn form_name(self) -> &'static str {
        match self {
            Self::Photo => "photo",
            Self::NidPhoto => "nidPhoto",
            Self::CertificateCopy => "certificateCopy",
        }
    }

    pub fn from_form_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.form_name() == name)
    }
}

/// Employee payload as received from a form or an import sheet.
/// Every field is optional here; required-ness is checked on conversion.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub date_of_birth: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub marital_status: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub nationality: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub contact_number: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub email_address: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub address: Option<String>,
    #[serde(default, rename = "employeeID", deserialize_with = "coerce::opt_string")]
    pub employee_id: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub designation: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub pond_number: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub date_of_joining: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub employment_type: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_f64")]
    pub net_salary: Option<f64>,
    #[serde(default, rename = "Status", deserialize_with = "coerce::opt_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub education: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub photo: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub nid_photo: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_string")]
    pub certificate_copy: Option<String>,
}

impl EmployeeInput {
    /// Build from multipart text fields. Unknown keys are ignored and empty
    /// values count as absent.
    pub fn from_form(fields: &HashMap<String, String>) -> Result<Self, ModelError> {
        let get = |key: &str| {
            fields
                .get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let net_salary = match fields.get("netSalary") {
            Some(raw) => coerce::parse_f64(raw)
                .map_err(|e| ModelError::Validation(format!("netSalary: {e}")))?,
            None => None,
        };
        Ok(Self {
            full_name: get("fullName"),
            date_of_birth: get("dateOfBirth"),
            gender: get("gender"),
            marital_status: get("maritalStatus"),
            nationality: get("nationality"),
            contact_number: get("contactNumber"),
            email_address: get("emailAddress"),
            address: get("address"),
            employee_id: get("employeeID"),
            department: get("department"),
            designation: get("designation"),
            pond_number: get("pondNumber"),
            date_of_joining: get("dateOfJoining"),
            employment_type: get("employmentType"),
            net_salary,
            status: get("Status"),
            education: get("education"),
            photo: None,
            nid_photo: None,
            certificate_copy: None,
        })
    }

    /// The three fields a bulk import row must always carry.
    pub fn has_import_essentials(&self) -> bool {
        [&self.full_name, &self.date_of_birth, &self.contact_number]
            .iter()
            .all(|v| v.as_deref().is_some_and(|s| !s.trim().is_empty()))
    }

    pub fn set_attachment(&mut self, field: AttachmentField, path: String) {
        match field {
            AttachmentField::Photo => self.photo = Some(path),
            AttachmentField::NidPhoto => self.nid_photo = Some(path),
            AttachmentField::CertificateCopy => self.certificate_copy = Some(path),
        }
    }

    /// Validate every mandatory field and produce a record with a fresh id.
    pub fn into_model(self) -> Result<Model, ModelError> {
        Ok(Model {
            id: Uuid::new_v4(),
            full_name: required(self.full_name, "fullName")?,
            date_of_birth: required_day(self.date_of_birth, "dateOfBirth")?,
            gender: required(self.gender, "gender")?,
            marital_status: required(self.marital_status, "maritalStatus")?,
            nationality: self.nationality,
            contact_number: required(self.contact_number, "contactNumber")?,
            email_address: self.email_address,
            address: required(self.address, "address")?,
            employee_id: required(self.employee_id, "employeeID")?,
            department: required(self.department, "department")?,
            designation: required(self.designation, "designation")?,
            pond_number: self.pond_number,
            date_of_joining: required_day(self.date_of_joining, "dateOfJoining")?,
            employment_type: required(self.employment_type, "employmentType")?,
            net_salary: self.net_salary.ok_or_else(|| ModelError::missing("netSalary"))?,
            status: required(self.status, "Status")?,
            education: required(self.education, "education")?,
            photo: self.photo,
            nid_photo: self.nid_photo,
            certificate_copy: self.certificate_copy,
        })
    }

    /// Partial merge: only provided fields overwrite the stored record.
    pub fn merge_into(self, am: &mut ActiveModel) -> Result<(), ModelError> {
        if let Some(v) = self.date_of_birth {
            am.date_of_birth = Set(required_day(Some(v), "dateOfBirth")?);
        }
        if let Some(v) = self.date_of_joining {
            am.date_of_joining = Set(required_day(Some(v), "dateOfJoining")?);
        }
        if let Some(v) = self.full_name { am.full_name = Set(v); }
        if let Some(v) = self.gender { am.gender = Set(v); }
        if let Some(v) = self.marital_status { am.marital_status = Set(v); }
        if let Some(v) = self.nationality { am.nationality = Set(Some(v)); }
        if let Some(v) = self.contact_number { am.contact_number = Set(v); }
        if let Some(v) = self.email_address { am.email_address = Set(Some(v)); }
        if let Some(v) = self.address { am.address = Set(v); }
        if let Some(v) = self.employee_id { am.employee_id = Set(v); }
        if let Some(v) = self.department { am.department = Set(v); }
        if let Some(v) = self.designation { am.designation = Set(v); }
        if let Some(v) = self.pond_number { am.pond_number = Set(Some(v)); }
        if let Some(v) = self.employment_type { am.employment_type = Set(v); }
        if let Some(v) = self.net_salary { am.net_salary = Set(v); }
        if let Some(v) = self.status { am.status = Set(v); }
        if let Some(v) = self.education { am.education = Set(v); }
        if let Some(v) = self.photo { am.photo = Set(Some(v)); }
        if let Some(v) = self.nid_photo { am.nid_photo = Set(Some(v)); }
        if let Some(v) = self.certificate_copy { am.certificate_copy = Set(Some(v)); }
        Ok(())
    }
}
