use crate::api::{
    ApiError, Catalog, CatalogEntry, CatalogUpsert, Certification, CertificationUpsert, Employee,
    EmployeeUpsert,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Departments, job titles and roles offered by the employee form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalogs {
    pub departments: Vec<CatalogEntry>,
    pub job_titles: Vec<CatalogEntry>,
    pub roles: Vec<CatalogEntry>,
}

impl Catalogs {
    pub fn entries(&self, catalog: Catalog) -> &[CatalogEntry] {
        match catalog {
            Catalog::Departments => &self.departments,
            Catalog::JobTitles => &self.job_titles,
            Catalog::Roles => &self.roles,
        }
    }
}

pub const CATALOGS: [Catalog; 3] = [Catalog::Departments, Catalog::JobTitles, Catalog::Roles];

pub fn catalog_label(catalog: Catalog) -> &'static str {
    match catalog {
        Catalog::Departments => "Departments",
        Catalog::JobTitles => "Job titles",
        Catalog::Roles => "Roles",
    }
}

/// Singular noun used in form headings and toasts.
pub fn catalog_noun(catalog: Catalog) -> &'static str {
    match catalog {
        Catalog::Departments => "Department",
        Catalog::JobTitles => "Job title",
        Catalog::Roles => "Role",
    }
}

/// Display name for a catalog reference; unknown ids show as-is.
pub fn catalog_name(entries: &[CatalogEntry], id: Option<&str>) -> String {
    match id {
        None => "-".to_string(),
        Some(id) => entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.name.clone())
            .unwrap_or_else(|| id.to_string()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeFormState {
    /// `Some` while editing an existing employee.
    pub editing_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department_id: String,
    pub job_title_id: String,
    pub role_id: String,
    pub active: bool,
}

impl Default for EmployeeFormState {
    fn default() -> Self {
        Self {
            editing_id: None,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            department_id: String::new(),
            job_title_id: String::new(),
            role_id: String::new(),
            active: true,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl EmployeeFormState {
    pub fn from_employee(employee: &Employee) -> Self {
        let upsert = EmployeeUpsert::from(employee);
        Self {
            editing_id: Some(employee.id.clone()),
            first_name: upsert.first_name,
            last_name: upsert.last_name,
            email: upsert.email,
            department_id: upsert.department_id.unwrap_or_default(),
            job_title_id: upsert.job_title_id.unwrap_or_default(),
            role_id: upsert.role_id.unwrap_or_default(),
            active: upsert.active,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_request(&self) -> Result<EmployeeUpsert, ApiError> {
        if self.first_name.trim().is_empty()
            || self.last_name.trim().is_empty()
            || self.email.trim().is_empty()
        {
            return Err(ApiError::validation("Please fill in all required fields."));
        }
        Ok(EmployeeUpsert {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            department_id: non_empty(&self.department_id),
            job_title_id: non_empty(&self.job_title_id),
            role_id: non_empty(&self.role_id),
            active: self.active,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFormState {
    pub catalog: Catalog,
    pub editing_id: Option<String>,
    pub name: String,
    pub description: String,
}

impl Default for CatalogFormState {
    fn default() -> Self {
        Self {
            catalog: Catalog::Departments,
            editing_id: None,
            name: String::new(),
            description: String::new(),
        }
    }
}

impl CatalogFormState {
    pub fn from_entry(catalog: Catalog, entry: &CatalogEntry) -> Self {
        Self {
            catalog,
            editing_id: Some(entry.id.clone()),
            name: entry.name.clone(),
            description: entry.description.clone().unwrap_or_default(),
        }
    }

    /// Switching collections drops any half-finished edit.
    pub fn select(&mut self, catalog: Catalog) {
        *self = Self {
            catalog,
            ..Self::default()
        };
    }

    pub fn reset(&mut self) {
        self.select(self.catalog);
    }

    pub fn to_request(&self) -> Result<CatalogUpsert, ApiError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ApiError::validation(format!(
                "{} name is required.",
                catalog_noun(self.catalog)
            )));
        }
        Ok(CatalogUpsert {
            name: name.to_string(),
            description: non_empty(&self.description),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificationFormState {
    pub editing_id: Option<String>,
    pub name: String,
    pub issuer: String,
    /// `YYYY-MM-DD` as typed into the date input; blank means unknown.
    pub issued_on: String,
    pub expires_on: String,
}

fn optional_date(value: &str, field: &str) -> Result<Option<NaiveDate>, ApiError> {
    match non_empty(value) {
        None => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| ApiError::validation(format!("{} must be a valid date.", field))),
    }
}

impl CertificationFormState {
    pub fn from_certification(certification: &Certification) -> Self {
        let format = |date: Option<NaiveDate>| {
            date.map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        };
        Self {
            editing_id: Some(certification.id.clone()),
            name: certification.name.clone(),
            issuer: certification.issuer.clone().unwrap_or_default(),
            issued_on: format(certification.issued_on),
            expires_on: format(certification.expires_on),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_request(&self) -> Result<CertificationUpsert, ApiError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ApiError::validation("Certification name is required."));
        }
        let issued_on = optional_date(&self.issued_on, "Issue date")?;
        let expires_on = optional_date(&self.expires_on, "Expiry date")?;
        if let (Some(issued), Some(expires)) = (issued_on, expires_on) {
            if expires < issued {
                return Err(ApiError::validation(
                    "Expiry date must be on or after the issue date.",
                ));
            }
        }
        Ok(CertificationUpsert {
            name: name.to_string(),
            issuer: non_empty(&self.issuer),
            issued_on,
            expires_on,
        })
    }
}
