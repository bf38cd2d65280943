#[derive(Debug, Clone)]
pub enum Message {
    // === LEDGER MESSAGES ===
    DayRecorded(String), // date
    DayReplaced(String), // date
    LedgerSaved(String), // path
    LedgerNotFoundForMonth(String),
    LedgerFileMalformed(String), // path
    NewLedgerForMonth(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigReadFailed(String),
    ConfigModuleWorkday,
    ConfigNotInitialized,

    // === SUMMARY MESSAGES ===
    WorkingHoursForMonth(String), // month/year

    // === EXPORT MESSAGES ===
    ExportingMonth(String, String), // month, format
    ExportCompleted(String),        // path

    // === BREAK MESSAGES ===
    BreaksOverlap,
    InvalidBreakRange(String),

    // === PROMPT MESSAGES ===
    PromptLunchBreak,
    PromptDinnerBreak,
    PromptWorkStart,
    PromptWorkEnd,
    PromptWorkdayStart,
    PromptWorkdayEnd,

    // === INPUT VALIDATION MESSAGES ===
    InvalidWorkInterval(String),
    InvalidTimeFormat,
}
