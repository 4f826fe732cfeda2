use crate::api::{
    ApiClient, ApiError, CreateLeaveRequest, CreateOvertimeRequest, CreateReimbursementRequest,
    LeaveRequest, OvertimeRequest, ReimbursementRequest, RequestKind,
};
use futures::future::try_join3;
use std::rc::Rc;

use super::types::RequestLists;

#[derive(Clone)]
pub struct RequestsRepository {
    client: Rc<ApiClient>,
}

impl RequestsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    /// Fetches the three lists concurrently; any failure fails the whole load.
    pub async fn load_all(&self) -> Result<RequestLists, ApiError> {
        let (overtime, leave, reimbursement) = try_join3(
            self.client.list_overtime_requests(),
            self.client.list_leave_requests(),
            self.client.list_reimbursement_requests(),
        )
        .await?;
        log::debug!(
            "loaded {} overtime, {} leave, {} reimbursement requests",
            overtime.len(),
            leave.len(),
            reimbursement.len()
        );
        Ok(RequestLists {
            overtime,
            leave,
            reimbursement,
        })
    }

    pub async fn cancel(&self, kind: RequestKind, id: &str) -> Result<(), ApiError> {
        self.client.cancel_request(kind, id).await
    }

    pub async fn submit_leave(&self, payload: CreateLeaveRequest) -> Result<LeaveRequest, ApiError> {
        self.client.submit_leave(payload).await
    }

    pub async fn submit_overtime(
        &self,
        payload: CreateOvertimeRequest,
    ) -> Result<OvertimeRequest, ApiError> {
        self.client.submit_overtime(payload).await
    }

    pub async fn submit_reimbursement(
        &self,
        payload: CreateReimbursementRequest,
    ) -> Result<ReimbursementRequest, ApiError> {
        self.client.submit_reimbursement(payload).await
    }
}
