/// What a form field accepts when typed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldKind {
    Text,
    Date,
    Amount,
    Count,
    Choice(&'static [&'static str]),
}

#[derive(Debug, Clone)]
pub(crate) struct Field {
    pub(crate) label: String,
    pub(crate) kind: FieldKind,
    pub(crate) value: String,
    pub(crate) choice: usize,
}

impl Field {
    pub(crate) fn new(label: impl Into<String>, kind: FieldKind, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind,
            value: value.into(),
            choice: 0,
        }
    }

    /// Text shown in the input box.
    pub(crate) fn display(&self) -> &str {
        match self.kind {
            FieldKind::Choice(options) => options.get(self.choice).copied().unwrap_or(""),
            _ => &self.value,
        }
    }

    fn accepts(&self, c: char) -> bool {
        match self.kind {
            FieldKind::Text => !c.is_control(),
            FieldKind::Date => c.is_ascii_digit() || c == '-',
            FieldKind::Amount => c.is_ascii_digit() || (c == '.' && !self.value.contains('.')),
            FieldKind::Count => c.is_ascii_digit(),
            FieldKind::Choice(_) => false,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Form {
    pub(crate) fields: Vec<Field>,
    pub(crate) focus: usize,
    pub(crate) submit_label: &'static str,
}

impl Form {
    pub(crate) fn new(fields: Vec<Field>, submit_label: &'static str) -> Self {
        Self {
            fields,
            focus: 0,
            submit_label,
        }
    }

    pub(crate) fn next_field(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub(crate) fn prev_field(&mut self) {
        if !self.fields.is_empty() {
            self.focus = if self.focus == 0 {
                self.fields.len() - 1
            } else {
                self.focus - 1
            };
        }
    }

    /// Returns true when the focused field's value changed.
    pub(crate) fn input(&mut self, c: char) -> bool {
        match self.fields.get_mut(self.focus) {
            Some(field) if field.accepts(c) => {
                field.value.push(c);
                true
            }
            _ => false,
        }
    }

    pub(crate) fn backspace(&mut self) -> bool {
        match self.fields.get_mut(self.focus) {
            Some(field) if !matches!(field.kind, FieldKind::Choice(_)) => field.value.pop().is_some(),
            _ => false,
        }
    }

    /// Step a choice field forwards or backwards, wrapping around.
    pub(crate) fn cycle(&mut self, delta: i32) -> bool {
        let Some(field) = self.fields.get_mut(self.focus) else {
            return false;
        };
        let FieldKind::Choice(options) = field.kind else {
            return false;
        };
        if options.is_empty() {
            return false;
        }
        let len = options.len() as i32;
        field.choice = (field.choice as i32 + delta).rem_euclid(len) as usize;
        true
    }

    pub(crate) fn value(&self, index: usize) -> &str {
        self.fields.get(index).map(|f| f.value.as_str()).unwrap_or("")
    }

    pub(crate) fn choice(&self, index: usize) -> usize {
        self.fields.get(index).map(|f| f.choice).unwrap_or(0)
    }

    pub(crate) fn set_value(&mut self, index: usize, value: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(index) {
            field.value = value.into();
        }
    }
}
