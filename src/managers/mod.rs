pub mod group_manager;
