//! `SeaORM` entity definitions.

pub mod sales_evidence;
