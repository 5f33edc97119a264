use std::collections::VecDeque;
use std::path::Path;

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use leadform_core::time::{format_input_date, parse_optional_date, today_local};
use leadform_core::{Brand, ConditionalFields, FormState, LeadType, Product, StatusKind, StoreType};

use crate::actions::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Customer,
    VisitDate,
    LeadType,
    Brand(Brand),
    StoreType,
    Status,
    FollowUpDate,
    Product(Product),
    NextConnectDate,
    Description,
    Submit,
}

impl Field {
    pub fn is_date(self) -> bool {
        matches!(
            self,
            Field::VisitDate | Field::FollowUpDate | Field::NextConnectDate
        )
    }
}

#[derive(Debug, Clone)]
pub struct App {
    pub form: FormState,
    pub choices: Vec<String>,
    pub customer_index: usize,
    pub focus: Field,
    pub visit_date_input: String,
    pub follow_up_input: String,
    pub next_connect_input: String,
    pub prefill_visit_date: bool,
    pub show_help: bool,
    pub should_quit: bool,
    pub status: Option<String>,
    pub error: Option<String>,
    actions: VecDeque<Action>,
}

impl App {
    pub fn new(choices: Vec<String>, prefill_visit_date: bool) -> Self {
        let visit_date = prefill_visit_date.then(today_local);
        Self {
            form: FormState::new(visit_date),
            choices,
            customer_index: 0,
            focus: Field::Customer,
            visit_date_input: visit_date.map(format_input_date).unwrap_or_default(),
            follow_up_input: String::new(),
            next_connect_input: String::new(),
            prefill_visit_date,
            show_help: false,
            should_quit: false,
            status: None,
            error: None,
            actions: VecDeque::new(),
        }
    }

    pub fn enqueue(&mut self, action: Action) {
        self.actions.push_back(action);
    }

    pub fn next_action(&mut self) -> Option<Action> {
        self.actions.pop_front()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = None;
        self.error = Some(message.into());
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.error = None;
        self.status = Some(message.into());
    }

    pub fn fields(&self) -> Vec<Field> {
        let mut fields = vec![Field::Customer];
        if self.form.selection.is_none() {
            return fields;
        }
        fields.push(Field::VisitDate);
        fields.push(Field::LeadType);
        fields.extend(Brand::ALL.into_iter().map(Field::Brand));
        fields.push(Field::StoreType);
        fields.push(Field::Status);

        let conditional = ConditionalFields::for_status(self.form.draft.status);
        if conditional.follow_up_date {
            fields.push(Field::FollowUpDate);
        }
        if conditional.products {
            fields.extend(Product::ALL.into_iter().map(Field::Product));
        }
        if conditional.next_connect_date {
            fields.push(Field::NextConnectDate);
        }
        fields.push(Field::Description);
        fields.push(Field::Submit);
        fields
    }

    pub fn focus_next(&mut self) {
        let fields = self.fields();
        let pos = fields.iter().position(|field| *field == self.focus);
        let next = pos.map_or(0, |pos| (pos + 1) % fields.len());
        self.focus = fields[next];
    }

    pub fn focus_prev(&mut self) {
        let fields = self.fields();
        let pos = fields.iter().position(|field| *field == self.focus);
        let prev = pos.map_or(0, |pos| (pos + fields.len() - 1) % fields.len());
        self.focus = fields[prev];
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::F(1) | KeyCode::Esc) {
                self.show_help = false;
            }
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::F(1) => {
                self.show_help = true;
                return;
            }
            KeyCode::Tab => {
                self.focus_next();
                return;
            }
            KeyCode::BackTab => {
                self.focus_prev();
                return;
            }
            _ => {}
        }

        match self.focus {
            Field::Customer => self.handle_customer_key(key),
            Field::LeadType => {
                self.handle_selector_key(key, |app, forward| {
                    app.form.draft.lead_type =
                        cycle(app.form.draft.lead_type, &LeadType::ALL, forward);
                });
            }
            Field::StoreType => {
                self.handle_selector_key(key, |app, forward| {
                    app.form.draft.store_type =
                        cycle(app.form.draft.store_type, &StoreType::ALL, forward);
                });
            }
            Field::Status => {
                self.handle_selector_key(key, |app, forward| {
                    app.form.draft.status =
                        cycle(app.form.draft.status, &StatusKind::ALL, forward);
                });
            }
            Field::Brand(brand) => match key.code {
                KeyCode::Char(' ') => self.form.draft.toggle_brand(brand),
                KeyCode::Enter | KeyCode::Down => self.focus_next(),
                KeyCode::Up => self.focus_prev(),
                _ => {}
            },
            Field::Product(product) => match key.code {
                KeyCode::Char(' ') => self.form.draft.toggle_product(product),
                KeyCode::Enter | KeyCode::Down => self.focus_next(),
                KeyCode::Up => self.focus_prev(),
                _ => {}
            },
            Field::VisitDate | Field::FollowUpDate | Field::NextConnectDate => {
                self.handle_date_key(key)
            }
            Field::Description => match key.code {
                KeyCode::Enter => self.form.draft.description.push('\n'),
                _ => apply_text_input(&mut self.form.draft.description, key),
            },
            Field::Submit => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.enqueue(Action::Submit),
                KeyCode::Up => self.focus_prev(),
                _ => {}
            },
        }
    }

    fn handle_customer_key(&mut self, key: KeyEvent) {
        let len = self.choices.len();
        if len == 0 {
            return;
        }
        let next = match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.customer_index.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => (self.customer_index + 1).min(len - 1),
            KeyCode::Home => 0,
            KeyCode::End => len - 1,
            KeyCode::Enter => {
                self.focus_next();
                return;
            }
            _ => return,
        };
        if next != self.customer_index {
            self.customer_index = next;
            self.form.select(&self.choices[next]);
            self.status = None;
            self.error = None;
        }
    }

    fn handle_selector_key(&mut self, key: KeyEvent, apply: impl FnOnce(&mut Self, bool)) {
        match key.code {
            KeyCode::Right | KeyCode::Char('l') => apply(self, true),
            KeyCode::Left | KeyCode::Char('h') => apply(self, false),
            KeyCode::Enter | KeyCode::Down => self.focus_next(),
            KeyCode::Up => self.focus_prev(),
            _ => {}
        }
    }

    fn handle_date_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(target) = self.date_input_mut(self.focus) {
                    *target = format_input_date(today_local());
                }
            }
            KeyCode::Enter | KeyCode::Down => self.focus_next(),
            KeyCode::Up => self.focus_prev(),
            _ => {
                if let Some(target) = self.date_input_mut(self.focus) {
                    apply_text_input(target, key);
                }
            }
        }
    }

    pub fn date_input(&self, field: Field) -> &str {
        match field {
            Field::VisitDate => &self.visit_date_input,
            Field::FollowUpDate => &self.follow_up_input,
            Field::NextConnectDate => &self.next_connect_input,
            _ => "",
        }
    }

    fn date_input_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::VisitDate => Some(&mut self.visit_date_input),
            Field::FollowUpDate => Some(&mut self.follow_up_input),
            Field::NextConnectDate => Some(&mut self.next_connect_input),
            _ => None,
        }
    }

    pub fn sync_dates(&mut self) -> Result<(), String> {
        let conditional = ConditionalFields::for_status(self.form.draft.status);
        let draft = &mut self.form.draft;
        draft.visit_date = parse_labeled("Visit Date", &self.visit_date_input)?;
        draft.follow_up_date = if conditional.follow_up_date {
            parse_labeled("Follow-Up Date", &self.follow_up_input)?
        } else {
            None
        };
        draft.next_connect_date = if conditional.next_connect_date {
            parse_labeled("Next Connect Date", &self.next_connect_input)?
        } else {
            None
        };
        Ok(())
    }

    pub fn finish_submit(&mut self, ledger: &Path) {
        let visit_date = self.prefill_visit_date.then(today_local);
        self.form.reset_entry(visit_date);
        self.visit_date_input = visit_date.map(format_input_date).unwrap_or_default();
        self.follow_up_input.clear();
        self.next_connect_input.clear();
        if !self.fields().contains(&self.focus) {
            self.focus = Field::Submit;
        }
        self.set_status(format!("Data saved successfully to {}", ledger.display()));
    }
}

fn parse_labeled(label: &str, input: &str) -> Result<Option<NaiveDate>, String> {
    parse_optional_date(input).map_err(|err| format!("{}: {}", label, err))
}

fn cycle<T: Copy + PartialEq>(current: Option<T>, all: &[T], forward: bool) -> Option<T> {
    let len = all.len() + 1;
    let pos = current
        .and_then(|value| all.iter().position(|item| *item == value))
        .map_or(0, |idx| idx + 1);
    let next = if forward {
        (pos + 1) % len
    } else {
        (pos + len - 1) % len
    };
    next.checked_sub(1).map(|idx| all[idx])
}

fn apply_text_input(target: &mut String, key: KeyEvent) {
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            target.clear();
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            delete_last_word(target);
        }
        KeyCode::Char(ch) => {
            if !key.modifiers.contains(KeyModifiers::CONTROL) {
                target.push(ch);
            }
        }
        KeyCode::Backspace => {
            target.pop();
        }
        _ => {}
    }
}

fn delete_last_word(value: &mut String) {
    while value.ends_with(|ch: char| ch.is_whitespace()) {
        value.pop();
    }
    while value.ends_with(|ch: char| !ch.is_whitespace()) {
        value.pop();
    }
}
