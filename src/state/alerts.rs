// Alert panels waiting to be dismissed

pub const ERROR_TITLE: &str = "An Error Has Occurred";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

#[derive(Default, Debug)]
pub struct Alerts {
    open: Vec<Alert>,
}

impl Alerts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show an alert. Re-issuing an alert that is already open does nothing,
    /// so this may be called every frame.
    pub fn alert(&mut self, title: impl Into<String>, message: impl Into<String>) {
        let alert = Alert {
            title: title.into(),
            message: message.into(),
        };
        if !self.open.contains(&alert) {
            log::debug!("Alert opened: {}", alert.title);
            self.open.push(alert);
        }
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.alert(ERROR_TITLE, message);
    }

    pub fn dismiss(&mut self, index: usize) -> Option<Alert> {
        (index < self.open.len()).then(|| self.open.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.open.iter()
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}
