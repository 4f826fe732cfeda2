use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Accepts `YYYY-MM-DD` as well as full timestamps and keeps the calendar date.
pub fn parse_api_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|ts| ts.date())
}

pub fn parse_api_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

mod flexible_date {
    use super::*;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        parse_api_date(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date `{}`", raw)))
    }

    pub mod option {
        use super::*;

        pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
            match date {
                Some(date) => super::serialize(date, s),
                None => s.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
            match Option::<String>::deserialize(d)? {
                None => Ok(None),
                Some(raw) if raw.trim().is_empty() => Ok(None),
                Some(raw) => parse_api_date(&raw)
                    .map(Some)
                    .ok_or_else(|| serde::de::Error::custom(format!("invalid date `{}`", raw))),
            }
        }
    }
}

mod flexible_datetime {
    use super::*;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(ts: &Option<NaiveDateTime>, s: S) -> Result<S::Ok, S::Error> {
        match ts {
            Some(ts) => s.serialize_str(&ts.format("%Y-%m-%dT%H:%M:%S").to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDateTime>, D::Error> {
        match Option::<String>::deserialize(d)? {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => parse_api_datetime(&raw)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp `{}`", raw))),
        }
    }
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    #[serde(alias = "token")]
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

// ---------------------------------------------------------------------------
// Employee self-service
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeProfile {
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default = "default_true", alias = "isActive")]
    pub active: bool,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, with = "flexible_date::option")]
    pub hire_date: Option<NaiveDate>,
}

fn default_true() -> bool {
    true
}

impl EmployeeProfile {
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim();
        if name.is_empty() {
            self.email.clone()
        } else {
            name.to_string()
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role
            .as_deref()
            .map(|role| role.eq_ignore_ascii_case("admin") || role.eq_ignore_ascii_case("hr"))
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakRecord {
    pub id: String,
    #[serde(with = "flexible_datetime", alias = "breakStart")]
    pub start: Option<NaiveDateTime>,
    #[serde(default, with = "flexible_datetime", alias = "breakEnd")]
    pub end: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    #[serde(with = "flexible_date")]
    pub date: NaiveDate,
    #[serde(default, with = "flexible_datetime")]
    pub clock_in: Option<NaiveDateTime>,
    #[serde(default, with = "flexible_datetime")]
    pub clock_out: Option<NaiveDateTime>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub breaks: Vec<BreakRecord>,
}

impl AttendanceRecord {
    pub fn is_complete(&self) -> bool {
        self.clock_out.is_some()
    }

    pub fn open_break(&self) -> Option<&BreakRecord> {
        self.breaks.iter().find(|b| b.end.is_none())
    }

    pub fn worked_hours(&self) -> Option<f64> {
        let (start, end) = (self.clock_in?, self.clock_out?);
        let minutes = (end - start).num_minutes();
        let breaks: i64 = self
            .breaks
            .iter()
            .filter_map(|b| Some((b.end? - b.start?).num_minutes()))
            .sum();
        Some(((minutes - breaks).max(0) as f64) / 60.0)
    }
}

/// Status shared by every request kind. Absent on the wire means `PENDING`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    #[serde(alias = "CANCELLED")]
    Canceled,
}

impl RequestStatus {
    pub const ALL: [RequestStatus; 4] = [
        RequestStatus::Pending,
        RequestStatus::Approved,
        RequestStatus::Rejected,
        RequestStatus::Canceled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Pending => "PENDING",
            RequestStatus::Approved => "APPROVED",
            RequestStatus::Rejected => "REJECTED",
            RequestStatus::Canceled => "CANCELED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Some(RequestStatus::Pending),
            "APPROVED" => Some(RequestStatus::Approved),
            "REJECTED" => Some(RequestStatus::Rejected),
            "CANCELED" | "CANCELLED" => Some(RequestStatus::Canceled),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Approved => "Approved",
            RequestStatus::Rejected => "Rejected",
            RequestStatus::Canceled => "Canceled",
        }
    }
}

fn status_or_pending<'de, D: Deserializer<'de>>(d: D) -> Result<RequestStatus, D::Error> {
    Ok(Option::<RequestStatus>::deserialize(d)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestKind {
    Overtime,
    Leave,
    Reimbursement,
}

impl RequestKind {
    pub const ALL: [RequestKind; 3] = [
        RequestKind::Overtime,
        RequestKind::Leave,
        RequestKind::Reimbursement,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RequestKind::Overtime => "OVERTIME",
            RequestKind::Leave => "LEAVE",
            RequestKind::Reimbursement => "REIMBURSEMENT",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RequestKind::Overtime => "Overtime",
            RequestKind::Leave => "Leave",
            RequestKind::Reimbursement => "Reimbursement",
        }
    }

    /// Collection path, relative to the API base URL.
    pub fn collection_path(self) -> &'static str {
        match self {
            RequestKind::Overtime => "/overtime",
            RequestKind::Leave => "/employee/leave-requests",
            RequestKind::Reimbursement => "/employee/reimbursement-requests",
        }
    }

    pub fn list_path(self) -> String {
        match self {
            RequestKind::Overtime => "/overtime/my-requests".to_string(),
            kind => kind.collection_path().to_string(),
        }
    }

    pub fn cancel_path(self, id: &str) -> String {
        format!("{}/{}/cancel", self.collection_path(), id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OvertimeRequest {
    pub id: String,
    #[serde(with = "flexible_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub hours: Option<f64>,
    #[serde(default, alias = "description")]
    pub reason: Option<String>,
    #[serde(default, deserialize_with = "status_or_pending")]
    pub status: RequestStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: String,
    #[serde(default)]
    pub leave_type: Option<String>,
    #[serde(with = "flexible_date")]
    pub start_date: NaiveDate,
    #[serde(with = "flexible_date")]
    pub end_date: NaiveDate,
    #[serde(default, with = "flexible_date::option")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default, deserialize_with = "status_or_pending")]
    pub status: RequestStatus,
}

impl LeaveRequest {
    pub fn primary_date(&self) -> NaiveDate {
        self.date.unwrap_or(self.start_date)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReimbursementRequest {
    pub id: String,
    #[serde(with = "flexible_date", alias = "expenseDate")]
    pub date: NaiveDate,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "status_or_pending")]
    pub status: RequestStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeaveRequest {
    pub leave_type: String,
    #[serde(with = "flexible_date")]
    pub start_date: NaiveDate,
    #[serde(with = "flexible_date")]
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOvertimeRequest {
    #[serde(with = "flexible_date")]
    pub date: NaiveDate,
    pub hours: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReimbursementRequest {
    #[serde(with = "flexible_date")]
    pub date: NaiveDate,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub description: String,
}

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub name: String,
    #[serde(alias = "type")]
    pub document_type: String,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, with = "flexible_datetime")]
    pub uploaded_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDocument {
    pub name: String,
    pub document_type: String,
}

/// Raw file content handed to the multipart helpers.
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DownloadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub department_id: Option<String>,
    #[serde(default)]
    pub job_title_id: Option<String>,
    #[serde(default)]
    pub role_id: Option<String>,
    #[serde(default = "default_true", alias = "isActive")]
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpsert {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<String>,
    pub active: bool,
}

impl From<&Employee> for EmployeeUpsert {
    fn from(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            department_id: employee.department_id.clone(),
            job_title_id: employee.job_title_id.clone(),
            role_id: employee.role_id.clone(),
            active: employee.active,
        }
    }
}

/// Departments, job titles and roles share the same flat shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogUpsert {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

pub type Department = CatalogEntry;
pub type JobTitle = CatalogEntry;
pub type Role = CatalogEntry;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CertificationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default, with = "flexible_date::option")]
    pub issued_on: Option<NaiveDate>,
    #[serde(default, with = "flexible_date::option")]
    pub expires_on: Option<NaiveDate>,
    #[serde(default)]
    pub status: CertificationStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationUpsert {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "flexible_date::option",
        default
    )]
    pub issued_on: Option<NaiveDate>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "flexible_date::option",
        default
    )]
    pub expires_on: Option<NaiveDate>,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl ApiError {
    pub fn new(code: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: code.into(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", msg)
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::new("UNKNOWN", msg)
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::new("REQUEST_FAILED", msg)
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::new("UNAUTHORIZED", msg)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == "UNAUTHORIZED"
    }

    /// Builds an error from a non-2xx response body. Both `{ error }` and
    /// `{ message }` payloads are understood; anything else falls back to
    /// the status line.
    pub fn from_status(status: u16, reason: Option<&str>, body: &str) -> Self {
        #[derive(Deserialize)]
        struct Payload {
            #[serde(default)]
            error: Option<String>,
            #[serde(default)]
            message: Option<String>,
            #[serde(default)]
            code: Option<String>,
            #[serde(default)]
            details: Option<Value>,
        }

        let fallback_code = format!("HTTP_{}", status);
        match serde_json::from_str::<Payload>(body) {
            Ok(payload) if payload.error.is_some() || payload.message.is_some() => Self {
                error: payload
                    .error
                    .or(payload.message)
                    .unwrap_or_default(),
                code: payload.code.unwrap_or(fallback_code),
                details: payload.details,
            },
            _ => {
                let text = body.trim();
                let message = if !text.is_empty() && text.len() <= 200 && !text.starts_with('<') {
                    text.to_string()
                } else {
                    format!("Request failed with status {} {}", status, reason.unwrap_or(""))
                        .trim_end()
                        .to_string()
                };
                Self::new(fallback_code, message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_status_defaults_to_pending_when_missing_or_null() {
        let missing: OvertimeRequest =
            serde_json::from_value(json!({ "id": "o1", "date": "2024-05-01" })).unwrap();
        assert_eq!(missing.status, RequestStatus::Pending);

        let null: OvertimeRequest =
            serde_json::from_value(json!({ "id": "o1", "date": "2024-05-01", "status": null }))
                .unwrap();
        assert_eq!(null.status, RequestStatus::Pending);
    }

    #[test]
    fn request_status_accepts_british_spelling_and_rejects_unknown_values() {
        let cancelled: LeaveRequest = serde_json::from_value(json!({
            "id": "l1",
            "startDate": "2024-05-03",
            "endDate": "2024-05-04",
            "status": "CANCELLED"
        }))
        .unwrap();
        assert_eq!(cancelled.status, RequestStatus::Canceled);

        let unknown = serde_json::from_value::<LeaveRequest>(json!({
            "id": "l1",
            "startDate": "2024-05-03",
            "endDate": "2024-05-04",
            "status": "ESCALATED"
        }));
        assert!(unknown.is_err());
    }

    #[test]
    fn dates_accept_timestamps() {
        let record: ReimbursementRequest = serde_json::from_value(json!({
            "id": "r1",
            "expenseDate": "2024-05-02T13:45:00Z",
            "amount": 12.5,
            "description": "Taxi"
        }))
        .unwrap();
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
        assert_eq!(
            parse_api_date("2024-05-02T08:00:00.123"),
            NaiveDate::from_ymd_opt(2024, 5, 2)
        );
        assert_eq!(parse_api_date("not a date"), None);
    }

    #[test]
    fn leave_primary_date_falls_back_to_start_date() {
        let leave: LeaveRequest = serde_json::from_value(json!({
            "id": "l1",
            "startDate": "2024-05-03",
            "endDate": "2024-05-04"
        }))
        .unwrap();
        assert_eq!(
            leave.primary_date(),
            NaiveDate::from_ymd_opt(2024, 5, 3).unwrap()
        );
    }

    #[test]
    fn attendance_record_reports_completion_and_hours() {
        let record: AttendanceRecord = serde_json::from_value(json!({
            "id": "a1",
            "date": "2024-05-01",
            "clockIn": "2024-05-01T09:00:00",
            "clockOut": "2024-05-01T18:00:00",
            "breaks": [{ "id": "b1", "start": "2024-05-01T12:00:00", "end": "2024-05-01T13:00:00" }]
        }))
        .unwrap();
        assert!(record.is_complete());
        assert!(record.open_break().is_none());
        assert_eq!(record.worked_hours(), Some(8.0));
    }

    #[test]
    fn profile_full_name_falls_back_to_email() {
        let profile: EmployeeProfile = serde_json::from_value(json!({
            "id": "e1",
            "email": "jane@example.com"
        }))
        .unwrap();
        assert_eq!(profile.full_name(), "jane@example.com");
        assert!(profile.active);
        assert!(!profile.is_admin());
    }

    #[test]
    fn api_error_reads_error_and_message_payloads() {
        let err = ApiError::from_status(400, Some("Bad Request"), r#"{"message":"Invalid dates"}"#);
        assert_eq!(err.error, "Invalid dates");
        assert_eq!(err.code, "HTTP_400");

        let err = ApiError::from_status(
            409,
            None,
            r#"{"error":"Already exists","code":"CONFLICT"}"#,
        );
        assert_eq!(err.code, "CONFLICT");

        let err = ApiError::from_status(502, Some("Bad Gateway"), "<html>oops</html>");
        assert_eq!(err.error, "Request failed with status 502 Bad Gateway");
    }

    #[test]
    fn api_error_converts_into_display_string() {
        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
        assert_eq!(ApiError::unknown("boom").to_string(), "boom");
        assert!(ApiError::unauthorized("expired").is_unauthorized());
    }

    #[test]
    fn request_kind_paths_match_backend_routes() {
        assert_eq!(RequestKind::Overtime.list_path(), "/overtime/my-requests");
        assert_eq!(
            RequestKind::Leave.cancel_path("l1"),
            "/employee/leave-requests/l1/cancel"
        );
        assert_eq!(
            RequestKind::Reimbursement.cancel_path("r9"),
            "/employee/reimbursement-requests/r9/cancel"
        );
    }
}
