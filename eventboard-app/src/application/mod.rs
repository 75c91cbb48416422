mod event_commands;

pub use event_commands::EventCommands;
