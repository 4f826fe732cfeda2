use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::{LeaveRequest, OvertimeRequest, ReimbursementRequest, RequestKind, RequestStatus};

/// The three per-kind lists as returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestLists {
    pub overtime: Vec<OvertimeRequest>,
    pub leave: Vec<LeaveRequest>,
    pub reimbursement: Vec<ReimbursementRequest>,
}

/// One row of the combined request list, rebuilt on every load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnifiedRequest {
    pub id: String,
    pub kind: RequestKind,
    pub status: RequestStatus,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub leave_type: Option<String>,
    pub end_date: Option<NaiveDate>,
    pub hours: Option<f64>,
    pub amount: Option<f64>,
}

impl From<&OvertimeRequest> for UnifiedRequest {
    fn from(request: &OvertimeRequest) -> Self {
        Self {
            id: request.id.clone(),
            kind: RequestKind::Overtime,
            status: request.status,
            date: request.date,
            description: request.reason.clone(),
            leave_type: None,
            end_date: None,
            hours: request.hours,
            amount: None,
        }
    }
}

impl From<&LeaveRequest> for UnifiedRequest {
    fn from(request: &LeaveRequest) -> Self {
        Self {
            id: request.id.clone(),
            kind: RequestKind::Leave,
            status: request.status,
            date: request.primary_date(),
            description: request.reason.clone(),
            leave_type: request.leave_type.clone(),
            end_date: Some(request.end_date),
            hours: None,
            amount: None,
        }
    }
}

impl From<&ReimbursementRequest> for UnifiedRequest {
    fn from(request: &ReimbursementRequest) -> Self {
        Self {
            id: request.id.clone(),
            kind: RequestKind::Reimbursement,
            status: request.status,
            date: request.date,
            description: request.description.clone(),
            leave_type: None,
            end_date: None,
            hours: None,
            amount: request.amount,
        }
    }
}

impl UnifiedRequest {
    /// Ids are only unique within a kind.
    pub fn key(&self) -> String {
        format!("{}:{}", self.kind.as_str(), self.id)
    }

    pub fn is_cancelable(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    pub fn period_label(&self) -> String {
        match self.end_date {
            Some(end) if end != self.date => format!("{} - {}", self.date, end),
            _ => self.date.to_string(),
        }
    }

    pub fn detail_label(&self) -> String {
        match self.kind {
            RequestKind::Overtime => self
                .hours
                .map(|h| format!("{} h", h))
                .unwrap_or_else(|| "-".into()),
            RequestKind::Leave => self.leave_type.clone().unwrap_or_else(|| "-".into()),
            RequestKind::Reimbursement => self
                .amount
                .map(|a| format!("{:.2}", a))
                .unwrap_or_else(|| "-".into()),
        }
    }
}

/// Overtime first, then leave, then reimbursement; newest primary date
/// first with ties kept in that order.
pub fn merge_requests(lists: &RequestLists) -> Vec<UnifiedRequest> {
    let mut merged: Vec<UnifiedRequest> = lists
        .overtime
        .iter()
        .map(UnifiedRequest::from)
        .chain(lists.leave.iter().map(UnifiedRequest::from))
        .chain(lists.reimbursement.iter().map(UnifiedRequest::from))
        .collect();
    merged.sort_by(|a, b| b.date.cmp(&a.date));
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_lists() -> RequestLists {
        serde_json::from_value(json!({
            "overtime": [
                { "id": "o1", "date": "2024-05-01", "hours": 2.0, "status": "PENDING" },
                { "id": "o2", "date": "2024-05-03", "hours": 1.5, "reason": "Hotfix" }
            ],
            "leave": [
                {
                    "id": "l1",
                    "leaveType": "ANNUAL",
                    "startDate": "2024-05-03",
                    "endDate": "2024-05-04",
                    "status": "APPROVED"
                }
            ],
            "reimbursement": [
                { "id": "r1", "date": "2024-04-28", "amount": 12.5, "description": "Taxi" }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn merges_overtime_and_leave_newest_first() {
        let lists: RequestLists = serde_json::from_value(json!({
            "overtime": [{ "id": "o1", "date": "2024-05-01", "status": "PENDING" }],
            "leave": [{
                "id": "l1",
                "startDate": "2024-05-03",
                "endDate": "2024-05-04",
                "status": "APPROVED"
            }],
            "reimbursement": []
        }))
        .unwrap();

        let merged = merge_requests(&lists);
        let order: Vec<_> = merged.iter().map(|r| (r.kind, r.date.to_string())).collect();
        assert_eq!(
            order,
            vec![
                (RequestKind::Leave, "2024-05-03".to_string()),
                (RequestKind::Overtime, "2024-05-01".to_string()),
            ]
        );
    }

    #[test]
    fn merge_keeps_every_record_in_non_increasing_order() {
        let lists = sample_lists();
        let merged = merge_requests(&lists);
        assert_eq!(
            merged.len(),
            lists.overtime.len() + lists.leave.len() + lists.reimbursement.len()
        );
        assert!(merged.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[test]
    fn ties_keep_merge_order() {
        let merged = merge_requests(&sample_lists());
        // o2 and l1 share 2024-05-03; overtime was merged first.
        assert_eq!(merged[0].key(), "OVERTIME:o2");
        assert_eq!(merged[1].key(), "LEAVE:l1");
    }

    #[test]
    fn normalises_each_kind() {
        let merged = merge_requests(&sample_lists());
        let overtime = merged.iter().find(|r| r.id == "o2").unwrap();
        assert_eq!(overtime.status, RequestStatus::Pending);
        assert_eq!(overtime.description.as_deref(), Some("Hotfix"));
        assert_eq!(overtime.detail_label(), "1.5 h");

        let leave = merged.iter().find(|r| r.id == "l1").unwrap();
        assert_eq!(leave.leave_type.as_deref(), Some("ANNUAL"));
        assert_eq!(leave.period_label(), "2024-05-03 - 2024-05-04");
        assert!(!leave.is_cancelable());

        let reimbursement = merged.iter().find(|r| r.id == "r1").unwrap();
        assert_eq!(reimbursement.detail_label(), "12.50");
        assert!(reimbursement.is_cancelable());
    }

    #[test]
    fn leave_uses_explicit_date_when_present() {
        let lists: RequestLists = serde_json::from_value(json!({
            "overtime": [],
            "leave": [{
                "id": "l1",
                "date": "2024-04-20",
                "startDate": "2024-05-03",
                "endDate": "2024-05-04"
            }],
            "reimbursement": []
        }))
        .unwrap();
        assert_eq!(
            merge_requests(&lists)[0].date,
            NaiveDate::from_ymd_opt(2024, 4, 20).unwrap()
        );
    }
}
