pub mod group_schedule_toolbox;
pub mod nullable;
