use crate::api::{
    ApiClient, ApiError, Catalog, CatalogUpsert, Certification, CertificationUpsert, Employee,
    EmployeeUpsert,
};
use futures::future::try_join4;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

use super::utils::{catalog_noun, Catalogs};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDirectory {
    pub employees: Vec<Employee>,
    pub catalogs: Catalogs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificationDecision {
    Approve,
    Reject,
}

impl CertificationDecision {
    pub fn success_message(self) -> &'static str {
        match self {
            CertificationDecision::Approve => "Certification approved.",
            CertificationDecision::Reject => "Certification rejected.",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogCommand {
    Save {
        catalog: Catalog,
        id: Option<String>,
        payload: CatalogUpsert,
    },
    Delete {
        catalog: Catalog,
        id: String,
    },
}

impl CatalogCommand {
    pub fn success_message(&self) -> String {
        match self {
            CatalogCommand::Save { catalog, id: None, payload } => {
                format!("{} {} created.", catalog_noun(*catalog), payload.name)
            }
            CatalogCommand::Save { catalog, payload, .. } => {
                format!("{} {} updated.", catalog_noun(*catalog), payload.name)
            }
            CatalogCommand::Delete { catalog, .. } => format!("{} deleted.", catalog_noun(*catalog)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CertificationCommand {
    Save {
        employee_id: String,
        id: Option<String>,
        payload: CertificationUpsert,
    },
    Delete {
        employee_id: String,
        id: String,
    },
}

impl CertificationCommand {
    pub fn success_message(&self) -> &'static str {
        match self {
            CertificationCommand::Save { id: None, .. } => "Certification added.",
            CertificationCommand::Save { .. } => "Certification updated.",
            CertificationCommand::Delete { .. } => "Certification deleted.",
        }
    }
}

#[derive(Clone)]
pub struct AdminEmployeesRepository {
    client: Rc<ApiClient>,
}

impl AdminEmployeesRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn load_directory(&self) -> Result<EmployeeDirectory, ApiError> {
        let (mut employees, departments, job_titles, roles) = try_join4(
            self.client.list_employees(),
            self.client.list_departments(),
            self.client.list_job_titles(),
            self.client.list_roles(),
        )
        .await?;
        employees.sort_by(|a, b| {
            (a.last_name.to_lowercase(), a.first_name.to_lowercase())
                .cmp(&(b.last_name.to_lowercase(), b.first_name.to_lowercase()))
        });
        Ok(EmployeeDirectory {
            employees,
            catalogs: Catalogs {
                departments,
                job_titles,
                roles,
            },
        })
    }

    /// Creates when `id` is `None`, otherwise updates.
    pub async fn save(
        &self,
        id: Option<&str>,
        payload: EmployeeUpsert,
    ) -> Result<Employee, ApiError> {
        match id {
            Some(id) => self.client.update_employee(id, payload).await,
            None => self.client.create_employee(payload).await,
        }
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_employee(id).await
    }

    pub async fn apply_catalog(&self, command: &CatalogCommand) -> Result<(), ApiError> {
        match command {
            CatalogCommand::Save {
                catalog,
                id: Some(id),
                payload,
            } => self
                .client
                .update_catalog_entry(*catalog, id, payload.clone())
                .await
                .map(|_| ()),
            CatalogCommand::Save {
                catalog,
                id: None,
                payload,
            } => self
                .client
                .create_catalog_entry(*catalog, payload.clone())
                .await
                .map(|_| ()),
            CatalogCommand::Delete { catalog, id } => {
                self.client.delete_catalog_entry(*catalog, id).await
            }
        }
    }

    pub async fn apply_certification(&self, command: &CertificationCommand) -> Result<(), ApiError> {
        match command {
            CertificationCommand::Save {
                employee_id,
                id: Some(id),
                payload,
            } => self
                .client
                .update_certification(employee_id, id, payload.clone())
                .await
                .map(|_| ()),
            CertificationCommand::Save {
                employee_id,
                id: None,
                payload,
            } => self
                .client
                .add_certification(employee_id, payload.clone())
                .await
                .map(|_| ()),
            CertificationCommand::Delete { employee_id, id } => {
                self.client.delete_certification(employee_id, id).await
            }
        }
    }

    pub async fn certifications(&self, employee_id: &str) -> Result<Vec<Certification>, ApiError> {
        self.client.list_certifications(employee_id).await
    }

    pub async fn review(
        &self,
        employee_id: &str,
        certification_id: &str,
        decision: CertificationDecision,
    ) -> Result<Certification, ApiError> {
        match decision {
            CertificationDecision::Approve => {
                self.client
                    .approve_certification(employee_id, certification_id)
                    .await
            }
            CertificationDecision::Reject => {
                self.client
                    .reject_certification(employee_id, certification_id)
                    .await
            }
        }
    }
}
