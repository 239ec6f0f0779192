//! Field identity and option sets for the registration form

/// Course identifiers offered in the course select
pub const COURSE_OPTIONS: &[&str] = &["react", "fullstack", "uiux"];

/// Experience levels offered in the level radio row
pub const LEVEL_OPTIONS: &[&str] = &["beginner", "intermediate", "advanced"];

/// The five registration form fields, in visual order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Name,
    Email,
    Course,
    Level,
    Message,
}

impl FieldId {
    /// All fields in tab order
    pub const ALL: [FieldId; 5] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Course,
        FieldId::Level,
        FieldId::Message,
    ];

    /// Stable field name, used as the ErrorMap key label
    pub fn name(&self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Course => "course",
            FieldId::Level => "level",
            FieldId::Message => "message",
        }
    }

    /// Label shown above the field
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Name => "Full Name",
            FieldId::Email => "Email",
            FieldId::Course => "Course",
            FieldId::Level => "Experience level",
            FieldId::Message => "Short message (why this course?)",
        }
    }

    /// Placeholder shown inside the field while it is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            FieldId::Name => "Enter your full name",
            FieldId::Email => "you@example.com",
            FieldId::Course => "Select a course",
            FieldId::Level => "Select your level",
            FieldId::Message => "Tell us in one or two lines...",
        }
    }

    /// True for fields that take free text input
    pub fn is_text(&self) -> bool {
        matches!(self, FieldId::Name | FieldId::Email | FieldId::Message)
    }

    /// True for the multiline message field
    pub fn is_multiline(&self) -> bool {
        matches!(self, FieldId::Message)
    }

    /// Option set for select/radio fields (empty for text fields)
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            FieldId::Course => COURSE_OPTIONS,
            FieldId::Level => LEVEL_OPTIONS,
            _ => &[],
        }
    }
}

/// Cycle a select value forward through its option set.
///
/// The select keeps an explicit "nothing chosen" state, so the cycle runs
/// empty -> first -> ... -> last -> empty.
pub fn next_select_option(current: &str, options: &'static [&'static str]) -> &'static str {
    match options.iter().position(|o| *o == current) {
        None => options.first().copied().unwrap_or(""),
        Some(i) if i + 1 < options.len() => options[i + 1],
        Some(_) => "",
    }
}

/// Cycle a select value backward through its option set.
pub fn prev_select_option(current: &str, options: &'static [&'static str]) -> &'static str {
    match options.iter().position(|o| *o == current) {
        None => options.last().copied().unwrap_or(""),
        Some(0) => "",
        Some(i) => options[i - 1],
    }
}

/// Cycle a radio value forward. Radios cannot return to "nothing chosen":
/// once a value is picked the cycle wraps within the option set.
pub fn next_radio_option(current: &str, options: &'static [&'static str]) -> &'static str {
    match options.iter().position(|o| *o == current) {
        None => options.first().copied().unwrap_or(""),
        Some(i) => options[(i + 1) % options.len()],
    }
}

/// Cycle a radio value backward, wrapping within the option set.
pub fn prev_radio_option(current: &str, options: &'static [&'static str]) -> &'static str {
    match options.iter().position(|o| *o == current) {
        None => options.last().copied().unwrap_or(""),
        Some(0) => options[options.len() - 1],
        Some(i) => options[i - 1],
    }
}
