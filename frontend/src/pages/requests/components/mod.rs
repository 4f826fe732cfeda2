pub mod filter;
pub mod leave_form;
pub mod list;
pub mod overtime_form;
pub mod pagination;
pub mod reimbursement_form;
pub mod tabs;
