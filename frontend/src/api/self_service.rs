use reqwest::Method;
use serde_json::{json, Value};

use super::{
    client::ApiClient,
    types::{
        ApiError, AttendanceRecord, CreateLeaveRequest, CreateOvertimeRequest,
        CreateReimbursementRequest, EmployeeProfile, LeaveRequest, OvertimeRequest,
        ReimbursementRequest, RequestKind,
    },
};

impl ApiClient {
    pub async fn get_profile(&self) -> Result<EmployeeProfile, ApiError> {
        self.get_json("/employee/profile").await
    }

    pub async fn get_attendance_records(&self) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.get_json("/employee/attendance").await
    }

    pub async fn clock_in(&self) -> Result<AttendanceRecord, ApiError> {
        self.attendance_action("clock-in").await
    }

    pub async fn clock_out(&self) -> Result<AttendanceRecord, ApiError> {
        self.attendance_action("clock-out").await
    }

    pub async fn start_break(&self) -> Result<AttendanceRecord, ApiError> {
        self.attendance_action("break-start").await
    }

    pub async fn end_break(&self) -> Result<AttendanceRecord, ApiError> {
        self.attendance_action("break-end").await
    }

    async fn attendance_action(&self, action: &str) -> Result<AttendanceRecord, ApiError> {
        self.send_json::<Value, _>(
            Method::POST,
            &format!("/employee/attendance/{}", action),
            &json!({}),
        )
        .await
    }

    pub async fn list_overtime_requests(&self) -> Result<Vec<OvertimeRequest>, ApiError> {
        self.get_json(&RequestKind::Overtime.list_path()).await
    }

    pub async fn list_leave_requests(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        self.get_json(&RequestKind::Leave.list_path()).await
    }

    pub async fn list_reimbursement_requests(
        &self,
    ) -> Result<Vec<ReimbursementRequest>, ApiError> {
        self.get_json(&RequestKind::Reimbursement.list_path()).await
    }

    pub async fn submit_overtime(
        &self,
        request: CreateOvertimeRequest,
    ) -> Result<OvertimeRequest, ApiError> {
        self.send_json(
            Method::POST,
            RequestKind::Overtime.collection_path(),
            &request,
        )
        .await
    }

    pub async fn submit_leave(&self, request: CreateLeaveRequest) -> Result<LeaveRequest, ApiError> {
        self.send_json(Method::POST, RequestKind::Leave.collection_path(), &request)
            .await
    }

    pub async fn submit_reimbursement(
        &self,
        request: CreateReimbursementRequest,
    ) -> Result<ReimbursementRequest, ApiError> {
        self.send_json(
            Method::POST,
            RequestKind::Reimbursement.collection_path(),
            &request,
        )
        .await
    }

    pub async fn cancel_overtime(&self, id: &str) -> Result<(), ApiError> {
        self.cancel_request(RequestKind::Overtime, id).await
    }

    pub async fn cancel_leave(&self, id: &str) -> Result<(), ApiError> {
        self.cancel_request(RequestKind::Leave, id).await
    }

    pub async fn cancel_reimbursement(&self, id: &str) -> Result<(), ApiError> {
        self.cancel_request(RequestKind::Reimbursement, id).await
    }

    /// Status-only update; the caller patches its own copy on success.
    pub async fn cancel_request(&self, kind: RequestKind, id: &str) -> Result<(), ApiError> {
        self.send_without_body(Method::PATCH, &kind.cancel_path(id))
            .await
    }
}
