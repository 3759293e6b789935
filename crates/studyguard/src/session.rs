use crate::analysis::domain::StudentData;

/// The three screens a study session moves between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Input,
    Dashboard,
}

impl Screen {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Landing => "Landing",
            Self::Input => "Input",
            Self::Dashboard => "Dashboard",
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::Landing
    }
}

/// Navigation events raised by the presentation layer. A closed enum rather
/// than ad hoc flags so every transition is spelled out in one place.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    GetStarted,
    Submit(StudentData),
    Back,
    StartOver,
}

/// Client-side screen controller: tracks the active screen and the last
/// submitted record. Holds no business logic and performs no validation;
/// the input collector guards what reaches `Submit`.
#[derive(Debug, Clone, Default)]
pub struct StudySession {
    screen: Screen,
    student_data: Option<StudentData>,
}

impl StudySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn student_data(&self) -> Option<&StudentData> {
        self.student_data.as_ref()
    }

    /// Apply a navigation event. Events that have no meaning on the current
    /// screen are ignored.
    pub fn apply(&mut self, event: SessionEvent) {
        match (self.screen, event) {
            (Screen::Landing, SessionEvent::GetStarted) => {
                self.screen = Screen::Input;
            }
            (Screen::Input, SessionEvent::Submit(data)) => {
                self.student_data = Some(data);
                self.screen = Screen::Dashboard;
            }
            (Screen::Input, SessionEvent::Back) => {
                self.screen = Screen::Landing;
            }
            // Going back to edit keeps the submission so the form can be
            // prefilled; starting over discards it.
            (Screen::Dashboard, SessionEvent::Back) => {
                self.screen = Screen::Input;
            }
            (Screen::Dashboard, SessionEvent::StartOver) => {
                self.student_data = None;
                self.screen = Screen::Input;
            }
            _ => {}
        }
    }
}
