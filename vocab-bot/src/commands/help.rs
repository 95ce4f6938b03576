//! Help command - shows available commands

/// Execute the help command
pub fn execute() -> String {
    "Vocabulary trainer commands:\n\n\
    /add <word> <translation> - Add a new word\n\
    /last [limit] - Show words to repeat (default 5)\n\
    /mem <n> [n ...] - Mark words from the last list as memorized\n\
    /del <n> [n ...] - Delete words from the last list\n\
    /stats - Show vocabulary totals\n\
    /help - Show this help message\n\n\
    Example:\n\
    /add cat кошка\n\
    /last\n\
    /mem 1 3"
        .to_string()
}
