/// Emitted by selection mutations; the status line is the consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    Added(&'static str),
    Removed(&'static str),
}

impl SelectionEvent {
    pub fn describe(self) -> String {
        match self {
            SelectionEvent::Added(value) => format!("selected {value}"),
            SelectionEvent::Removed(value) => format!("removed {value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SelectionEvent;

    #[test]
    fn describe_names_the_value() {
        assert_eq!(SelectionEvent::Added("Apple").describe(), "selected Apple");
        assert_eq!(
            SelectionEvent::Removed("Grape").describe(),
            "removed Grape"
        );
    }
}
