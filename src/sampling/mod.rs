mod class_balancer;

pub use class_balancer::BalancingStrategy;
pub use class_balancer::balanced_indices;
