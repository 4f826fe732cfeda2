use crate::api::{
    ApiError, CreateLeaveRequest, CreateOvertimeRequest, CreateReimbursementRequest,
    RequestKind, RequestStatus,
};
use chrono::NaiveDate;
use leptos::*;

use super::types::UnifiedRequest;

pub const PAGE_SIZE: usize = 8;

pub const LEAVE_TYPES: [(&str, &str); 4] = [
    ("ANNUAL", "Annual leave"),
    ("SICK", "Sick leave"),
    ("PERSONAL", "Personal leave"),
    ("UNPAID", "Unpaid leave"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypeTab {
    #[default]
    All,
    Kind(RequestKind),
}

impl TypeTab {
    pub const TABS: [TypeTab; 4] = [
        TypeTab::All,
        TypeTab::Kind(RequestKind::Overtime),
        TypeTab::Kind(RequestKind::Leave),
        TypeTab::Kind(RequestKind::Reimbursement),
    ];

    pub fn label(self) -> &'static str {
        match self {
            TypeTab::All => "All",
            TypeTab::Kind(kind) => kind.label(),
        }
    }

    fn accepts(self, kind: RequestKind) -> bool {
        match self {
            TypeTab::All => true,
            TypeTab::Kind(selected) => selected == kind,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(RequestStatus),
}

impl StatusFilter {
    /// `""`/`"all"` or anything unrecognised selects everything.
    pub fn from_value(value: &str) -> Self {
        RequestStatus::parse(value)
            .map(StatusFilter::Only)
            .unwrap_or(StatusFilter::All)
    }

    pub fn value(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    fn accepts(self, status: RequestStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(selected) => selected == status,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestFilter {
    pub tab: TypeTab,
    pub status: StatusFilter,
    pub search: String,
}

impl RequestFilter {
    pub fn matches(&self, request: &UnifiedRequest) -> bool {
        self.tab.accepts(request.kind)
            && self.status.accepts(request.status)
            && matches_search(&self.search, request)
    }
}

fn matches_search(search: &str, request: &UnifiedRequest) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() || needle == "all" {
        return true;
    }
    [request.description.as_deref(), request.leave_type.as_deref()]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn apply_filters(requests: &[UnifiedRequest], filter: &RequestFilter) -> Vec<UnifiedRequest> {
    requests
        .iter()
        .filter(|request| filter.matches(request))
        .cloned()
        .collect()
}

pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE)
}

pub fn clamp_page(page: usize, count: usize) -> usize {
    page.clamp(1, total_pages(count).max(1))
}

/// Items on the 1-based `page`, after clamping.
pub fn page_items(requests: &[UnifiedRequest], page: usize) -> Vec<UnifiedRequest> {
    let page = clamp_page(page, requests.len());
    requests
        .iter()
        .skip((page - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .cloned()
        .collect()
}

/// In-memory list plus the filter and page the user has chosen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestListState {
    pub requests: Vec<UnifiedRequest>,
    pub filter: RequestFilter,
    pub page: usize,
}

impl RequestListState {
    pub fn new(requests: Vec<UnifiedRequest>) -> Self {
        Self {
            requests,
            filter: RequestFilter::default(),
            page: 1,
        }
    }

    pub fn select_tab(&mut self, tab: TypeTab) {
        self.filter.tab = tab;
        self.page = 1;
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.filter.status = status;
        self.page = clamp_page(self.page, self.filtered().len());
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
        self.page = clamp_page(self.page, self.filtered().len());
    }

    pub fn go_to(&mut self, page: usize) {
        self.page = clamp_page(page, self.filtered().len());
    }

    pub fn filtered(&self) -> Vec<UnifiedRequest> {
        apply_filters(&self.requests, &self.filter)
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len())
    }

    pub fn current_page(&self) -> usize {
        clamp_page(self.page, self.filtered().len())
    }

    pub fn visible(&self) -> Vec<UnifiedRequest> {
        page_items(&self.filtered(), self.page)
    }

    /// Returns false when no record of that kind and id is loaded.
    pub fn mark_canceled(&mut self, kind: RequestKind, id: &str) -> bool {
        match self
            .requests
            .iter_mut()
            .find(|request| request.kind == kind && request.id == id)
        {
            Some(request) => {
                request.status = RequestStatus::Canceled;
                true
            }
            None => false,
        }
    }
}

#[derive(Clone, Copy)]
pub struct LeaveFormState {
    leave_type: RwSignal<String>,
    start_date: RwSignal<String>,
    end_date: RwSignal<String>,
    reason: RwSignal<String>,
}

impl Default for LeaveFormState {
    fn default() -> Self {
        Self {
            leave_type: create_rw_signal(LEAVE_TYPES[0].0.to_string()),
            start_date: create_rw_signal(String::new()),
            end_date: create_rw_signal(String::new()),
            reason: create_rw_signal(String::new()),
        }
    }
}

impl LeaveFormState {
    pub fn leave_type_signal(&self) -> RwSignal<String> {
        self.leave_type
    }

    pub fn start_signal(&self) -> RwSignal<String> {
        self.start_date
    }

    pub fn end_signal(&self) -> RwSignal<String> {
        self.end_date
    }

    pub fn reason_signal(&self) -> RwSignal<String> {
        self.reason
    }

    pub fn reset(&self) {
        self.leave_type.set(LEAVE_TYPES[0].0.into());
        self.start_date.set(String::new());
        self.end_date.set(String::new());
        self.reason.set(String::new());
    }

    pub fn to_payload(self) -> Result<CreateLeaveRequest, ApiError> {
        let leave_type = self.leave_type.get().trim().to_string();
        if leave_type.is_empty() {
            return Err(ApiError::validation("Please choose a leave type."));
        }
        let start = parse_date(
            &self.start_date.get(),
            "Enter the start date as YYYY-MM-DD.",
        )?;
        let end = parse_date(&self.end_date.get(), "Enter the end date as YYYY-MM-DD.")?;
        if end < start {
            return Err(ApiError::validation(
                "The end date must be on or after the start date.",
            ));
        }
        Ok(CreateLeaveRequest {
            leave_type,
            start_date: start,
            end_date: end,
            reason: optional_string(self.reason.get()),
        })
    }
}

#[derive(Clone, Copy)]
pub struct OvertimeFormState {
    date: RwSignal<String>,
    hours: RwSignal<String>,
    reason: RwSignal<String>,
}

impl Default for OvertimeFormState {
    fn default() -> Self {
        Self {
            date: create_rw_signal(String::new()),
            hours: create_rw_signal(String::new()),
            reason: create_rw_signal(String::new()),
        }
    }
}

impl OvertimeFormState {
    pub fn date_signal(&self) -> RwSignal<String> {
        self.date
    }

    pub fn hours_signal(&self) -> RwSignal<String> {
        self.hours
    }

    pub fn reason_signal(&self) -> RwSignal<String> {
        self.reason
    }

    pub fn reset(&self) {
        self.date.set(String::new());
        self.hours.set(String::new());
        self.reason.set(String::new());
    }

    pub fn to_payload(self) -> Result<CreateOvertimeRequest, ApiError> {
        let date = parse_date(&self.date.get(), "Enter the overtime date as YYYY-MM-DD.")?;
        let hours = self
            .hours
            .get()
            .trim()
            .parse::<f64>()
            .map_err(|_| ApiError::validation("Overtime hours must be a number."))?;
        if !(0.5..=12.0).contains(&hours) {
            return Err(ApiError::validation(
                "Overtime hours must be between 0.5 and 12.",
            ));
        }
        Ok(CreateOvertimeRequest {
            date,
            hours,
            reason: optional_string(self.reason.get()),
        })
    }
}

#[derive(Clone, Copy)]
pub struct ReimbursementFormState {
    date: RwSignal<String>,
    amount: RwSignal<String>,
    category: RwSignal<String>,
    description: RwSignal<String>,
}

impl Default for ReimbursementFormState {
    fn default() -> Self {
        Self {
            date: create_rw_signal(String::new()),
            amount: create_rw_signal(String::new()),
            category: create_rw_signal(String::new()),
            description: create_rw_signal(String::new()),
        }
    }
}

impl ReimbursementFormState {
    pub fn date_signal(&self) -> RwSignal<String> {
        self.date
    }

    pub fn amount_signal(&self) -> RwSignal<String> {
        self.amount
    }

    pub fn category_signal(&self) -> RwSignal<String> {
        self.category
    }

    pub fn description_signal(&self) -> RwSignal<String> {
        self.description
    }

    pub fn reset(&self) {
        self.date.set(String::new());
        self.amount.set(String::new());
        self.category.set(String::new());
        self.description.set(String::new());
    }

    pub fn to_payload(self) -> Result<CreateReimbursementRequest, ApiError> {
        let date = parse_date(&self.date.get(), "Enter the expense date as YYYY-MM-DD.")?;
        let amount = self
            .amount
            .get()
            .trim()
            .parse::<f64>()
            .map_err(|_| ApiError::validation("Amount must be a number."))?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ApiError::validation("Amount must be greater than zero."));
        }
        let description = optional_string(self.description.get())
            .ok_or_else(|| ApiError::validation("Please describe the expense."))?;
        Ok(CreateReimbursementRequest {
            date,
            amount,
            category: optional_string(self.category.get()),
            description,
        })
    }
}

#[derive(Clone, Default)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<ApiError>,
}

impl MessageState {
    pub fn set_success(&mut self, msg: impl Into<String>) {
        self.success = Some(msg.into());
        self.error = None;
    }

    pub fn set_error(&mut self, msg: ApiError) {
        self.error = Some(msg);
        self.success = None;
    }

    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }
}

fn parse_date(input: &str, err: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| ApiError::validation(err.to_string()))
}

fn optional_string(value: String) -> Option<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
