pub mod plan_ops;
