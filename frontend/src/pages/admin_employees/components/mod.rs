pub mod catalogs;
pub mod certifications;
pub mod employee_form;
pub mod employee_list;
