use reqwest::Method;
use serde_json::{json, Value};

use super::{
    client::ApiClient,
    types::{
        ApiError, CatalogEntry, CatalogUpsert, Certification, CertificationUpsert, Department,
        Employee, EmployeeUpsert, JobTitle, Role,
    },
};

/// Flat admin collections that share one CRUD shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Catalog {
    Departments,
    JobTitles,
    Roles,
}

impl Catalog {
    pub fn path(self) -> &'static str {
        match self {
            Catalog::Departments => "/departments",
            Catalog::JobTitles => "/job-titles",
            Catalog::Roles => "/roles",
        }
    }
}

fn certifications_path(employee_id: &str) -> String {
    format!("/employees/{}/certifications", employee_id)
}

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.get_json("/employees").await
    }

    pub async fn get_employee(&self, id: &str) -> Result<Employee, ApiError> {
        self.get_json(&format!("/employees/{}", id)).await
    }

    pub async fn create_employee(&self, payload: EmployeeUpsert) -> Result<Employee, ApiError> {
        validate_employee(&payload)?;
        self.send_json(Method::POST, "/employees", &payload).await
    }

    pub async fn update_employee(
        &self,
        id: &str,
        payload: EmployeeUpsert,
    ) -> Result<Employee, ApiError> {
        validate_employee(&payload)?;
        self.send_json(Method::PUT, &format!("/employees/{}", id), &payload)
            .await
    }

    pub async fn delete_employee(&self, id: &str) -> Result<(), ApiError> {
        self.send_without_body(Method::DELETE, &format!("/employees/{}", id))
            .await
    }

    pub async fn list_catalog(&self, catalog: Catalog) -> Result<Vec<CatalogEntry>, ApiError> {
        self.get_json(catalog.path()).await
    }

    pub async fn create_catalog_entry(
        &self,
        catalog: Catalog,
        payload: CatalogUpsert,
    ) -> Result<CatalogEntry, ApiError> {
        if payload.name.trim().is_empty() {
            return Err(ApiError::validation("Name is required."));
        }
        self.send_json(Method::POST, catalog.path(), &payload).await
    }

    pub async fn update_catalog_entry(
        &self,
        catalog: Catalog,
        id: &str,
        payload: CatalogUpsert,
    ) -> Result<CatalogEntry, ApiError> {
        if payload.name.trim().is_empty() {
            return Err(ApiError::validation("Name is required."));
        }
        self.send_json(
            Method::PUT,
            &format!("{}/{}", catalog.path(), id),
            &payload,
        )
        .await
    }

    pub async fn delete_catalog_entry(&self, catalog: Catalog, id: &str) -> Result<(), ApiError> {
        self.send_without_body(Method::DELETE, &format!("{}/{}", catalog.path(), id))
            .await
    }

    pub async fn list_departments(&self) -> Result<Vec<Department>, ApiError> {
        self.list_catalog(Catalog::Departments).await
    }

    pub async fn list_job_titles(&self) -> Result<Vec<JobTitle>, ApiError> {
        self.list_catalog(Catalog::JobTitles).await
    }

    pub async fn list_roles(&self) -> Result<Vec<Role>, ApiError> {
        self.list_catalog(Catalog::Roles).await
    }

    pub async fn list_certifications(
        &self,
        employee_id: &str,
    ) -> Result<Vec<Certification>, ApiError> {
        self.get_json(&certifications_path(employee_id)).await
    }

    pub async fn add_certification(
        &self,
        employee_id: &str,
        payload: CertificationUpsert,
    ) -> Result<Certification, ApiError> {
        validate_certification(&payload)?;
        self.send_json(Method::POST, &certifications_path(employee_id), &payload)
            .await
    }

    pub async fn update_certification(
        &self,
        employee_id: &str,
        certification_id: &str,
        payload: CertificationUpsert,
    ) -> Result<Certification, ApiError> {
        validate_certification(&payload)?;
        self.send_json(
            Method::PUT,
            &format!("{}/{}", certifications_path(employee_id), certification_id),
            &payload,
        )
        .await
    }

    pub async fn delete_certification(
        &self,
        employee_id: &str,
        certification_id: &str,
    ) -> Result<(), ApiError> {
        self.send_without_body(
            Method::DELETE,
            &format!("{}/{}", certifications_path(employee_id), certification_id),
        )
        .await
    }

    pub async fn approve_certification(
        &self,
        employee_id: &str,
        certification_id: &str,
    ) -> Result<Certification, ApiError> {
        self.review_certification(employee_id, certification_id, "approve")
            .await
    }

    pub async fn reject_certification(
        &self,
        employee_id: &str,
        certification_id: &str,
    ) -> Result<Certification, ApiError> {
        self.review_certification(employee_id, certification_id, "reject")
            .await
    }

    async fn review_certification(
        &self,
        employee_id: &str,
        certification_id: &str,
        action: &str,
    ) -> Result<Certification, ApiError> {
        self.send_json::<Value, _>(
            Method::PUT,
            &format!(
                "{}/{}/{}",
                certifications_path(employee_id),
                certification_id,
                action
            ),
            &json!({}),
        )
        .await
    }
}

fn validate_employee(payload: &EmployeeUpsert) -> Result<(), ApiError> {
    if payload.first_name.trim().is_empty() || payload.last_name.trim().is_empty() {
        return Err(ApiError::validation("First and last name are required."));
    }
    let email = payload.email.trim();
    let valid_email = email
        .split_once('@')
        .map(|(local, domain)| !local.is_empty() && domain.contains('.'))
        .unwrap_or(false);
    if !valid_email {
        return Err(ApiError::validation("A valid email address is required."));
    }
    Ok(())
}

fn validate_certification(payload: &CertificationUpsert) -> Result<(), ApiError> {
    if payload.name.trim().is_empty() {
        return Err(ApiError::validation("Certification name is required."));
    }
    if let (Some(issued), Some(expires)) = (payload.issued_on, payload.expires_on) {
        if expires < issued {
            return Err(ApiError::validation(
                "Expiry date must be on or after the issue date.",
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn employee_validation_requires_names_and_email() {
        let mut payload = EmployeeUpsert {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@example.com".into(),
            active: true,
            ..Default::default()
        };
        assert!(validate_employee(&payload).is_ok());

        payload.email = "jane".into();
        assert_eq!(validate_employee(&payload).unwrap_err().code, "VALIDATION_ERROR");

        payload.email = "jane@example.com".into();
        payload.last_name = " ".into();
        assert!(validate_employee(&payload).is_err());
    }

    #[test]
    fn certification_validation_checks_date_order() {
        let payload = CertificationUpsert {
            name: "First Aid".into(),
            issuer: None,
            issued_on: NaiveDate::from_ymd_opt(2024, 5, 1),
            expires_on: NaiveDate::from_ymd_opt(2024, 4, 1),
        };
        assert!(validate_certification(&payload).is_err());
    }

    #[test]
    fn catalog_paths() {
        assert_eq!(Catalog::Departments.path(), "/departments");
        assert_eq!(Catalog::JobTitles.path(), "/job-titles");
        assert_eq!(Catalog::Roles.path(), "/roles");
        assert_eq!(certifications_path("e1"), "/employees/e1/certifications");
    }
}
