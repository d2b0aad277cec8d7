use crate::cli::core::{CommandResult, ShellContext};

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// A single top-level shell command.
pub struct Command {
    pub name: &'static str,
    pub usage: &'static str,
    pub summary: &'static str,
    pub handler: CommandHandler,
}

impl Command {
    pub const fn new(
        name: &'static str,
        usage: &'static str,
        summary: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            usage,
            summary,
            handler,
        }
    }
}

/// Ordered command table. Registration order is display order; with a
/// dozen commands a linear scan beats bookkeeping a separate index.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub fn register(&mut self, command: Command) {
        debug_assert!(
            self.find(command.name).is_none(),
            "duplicate command `{}`",
            command.name
        );
        self.commands.push(command);
    }

    pub fn find(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|command| command.name == name)
    }

    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.find(name).map(|command| command.handler)
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(|command| command.name)
    }
}
