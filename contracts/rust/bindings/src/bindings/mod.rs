pub mod accountability;
pub mod acu;
pub mod autonity;
pub mod interfaces;
pub mod liquid;
pub mod oracle;
pub mod stabilization;
pub mod supply_control;
pub mod upgrade_manager;
