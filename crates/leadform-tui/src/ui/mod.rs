use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use leadform_core::{Brand, Catalog, CustomerRecord, EntryView, FormView, Product, SENTINEL};

use crate::app::{App, Field};

pub fn draw(frame: &mut Frame<'_>, app: &App, catalog: &Catalog) {
    let size = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(4),
        ])
        .split(size);

    render_header(frame, chunks[0], catalog);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(chunks[1]);
    render_customers(frame, body[0], app);

    match app.form.render(catalog) {
        FormView::Unselected => {
            let paragraph = Paragraph::new("Select a customer to start a lead entry.")
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::ALL).title("Lead"));
            frame.render_widget(paragraph, body[1]);
        }
        FormView::Missing(err) => {
            let paragraph = Paragraph::new(err.to_string())
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default().borders(Borders::ALL).title("Lead"))
                .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, body[1]);
        }
        FormView::Entry(view) => render_entry(frame, body[1], app, &view),
    }

    render_footer(frame, chunks[2], app);

    if app.show_help {
        render_help(frame, size);
    }
}

fn render_header(frame: &mut Frame<'_>, area: Rect, catalog: &Catalog) {
    let title = format!("Lead Information Form  customers: {}", catalog.names().len());
    let block = Block::default().borders(Borders::ALL).title("leadform");
    frame.render_widget(Paragraph::new(title).block(block), area);
}

fn render_customers(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .choices
        .iter()
        .map(|choice| {
            let style = if choice == SENTINEL {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(choice.clone(), style)))
        })
        .collect();

    let border_style = if app.focus == Field::Customer {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("Select Customer/Company Name"),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    if !app.choices.is_empty() {
        state.select(Some(app.customer_index));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_entry(frame: &mut Frame<'_>, area: Rect, app: &App, view: &EntryView<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(5)])
        .split(area);

    render_details(frame, chunks[0], view.customer);

    let entry = entry_lines(app, view);
    let visible = chunks[1].height.saturating_sub(2) as usize;
    let scroll = entry
        .focus_row
        .map_or(0, |row| (row + 1).saturating_sub(visible));
    let paragraph = Paragraph::new(entry.lines)
        .block(Block::default().borders(Borders::ALL).title("Lead Entry"))
        .scroll((scroll as u16, 0));
    frame.render_widget(paragraph, chunks[1]);
}

#[derive(Default)]
struct EntryLines {
    lines: Vec<Line<'static>>,
    focus_row: Option<usize>,
}

impl EntryLines {
    fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    fn push_field(&mut self, line: Line<'static>, focused: bool) {
        if focused {
            self.focus_row = Some(self.lines.len());
        }
        self.lines.push(line);
    }
}

fn entry_lines(app: &App, view: &EntryView<'_>) -> EntryLines {
    let draft = &app.form.draft;
    let mut entry = EntryLines::default();

    entry.push_field(
        date_line(app, Field::VisitDate, "Visit Date"),
        app.focus == Field::VisitDate,
    );
    entry.push_field(
        selector_line(
            "Type of Lead",
            draft.lead_type.map(|value| value.as_str()),
            app.focus == Field::LeadType,
        ),
        app.focus == Field::LeadType,
    );
    entry.push(heading_line("Type of Brand:"));
    for brand in Brand::ALL {
        let focused = app.focus == Field::Brand(brand);
        entry.push_field(
            checkbox_line(brand.as_str(), draft.brands.contains(&brand), focused),
            focused,
        );
    }
    entry.push_field(
        selector_line(
            "Type of Store",
            draft.store_type.map(|value| value.as_str()),
            app.focus == Field::StoreType,
        ),
        app.focus == Field::StoreType,
    );
    entry.push_field(
        selector_line(
            "Status",
            draft.status.map(|value| value.as_str()),
            app.focus == Field::Status,
        ),
        app.focus == Field::Status,
    );

    let conditional = view.conditional;
    if conditional.follow_up_date {
        entry.push_field(
            date_line(app, Field::FollowUpDate, "Follow-Up Date"),
            app.focus == Field::FollowUpDate,
        );
    }
    if conditional.products {
        entry.push(heading_line("Customer Dealing Product:"));
        for product in Product::ALL {
            let focused = app.focus == Field::Product(product);
            entry.push_field(
                checkbox_line(product.as_str(), draft.products.contains(&product), focused),
                focused,
            );
        }
    }
    if conditional.next_connect_date {
        entry.push_field(
            date_line(app, Field::NextConnectDate, "Next Connect Date"),
            app.focus == Field::NextConnectDate,
        );
    }

    entry.push(heading_line("Description:"));
    let description_focus = app.focus == Field::Description;
    let description_style = focus_style(description_focus);
    if draft.description.is_empty() {
        entry.push_field(
            Line::from(Span::styled("(empty)", description_style)),
            description_focus,
        );
    } else {
        // The cursor sits on the last description line.
        for line in draft.description.split('\n') {
            entry.push_field(
                Line::from(Span::styled(format!("  {}", line), description_style)),
                description_focus,
            );
        }
    }
    entry.push(Line::from(""));

    let submit_style = if app.focus == Field::Submit {
        Style::default().fg(Color::Black).bg(Color::LightGreen)
    } else {
        Style::default().fg(Color::Green)
    };
    entry.push_field(
        Line::from(Span::styled("[Submit]", submit_style)),
        app.focus == Field::Submit,
    );
    entry
}

fn render_details(frame: &mut Frame<'_>, area: Rect, customer: &CustomerRecord) {
    let block = Block::default().borders(Borders::ALL).title("Customer Details");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let fields = customer.fields();
    let (left, right) = fields.split_at(4);
    for (column, rect) in [left, right].into_iter().zip(columns.iter()) {
        let lines: Vec<Line> = column
            .iter()
            .map(|(name, value)| detail_line(&name.to_string(), value))
            .collect();
        frame.render_widget(Paragraph::new(lines), *rect);
    }
}

fn render_footer(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let hint = match app.focus {
        Field::Customer => "j/k move  tab next  F1 help  esc quit",
        Field::LeadType | Field::StoreType | Field::Status => {
            "left/right choose  tab next  shift+tab prev  esc quit"
        }
        Field::Brand(_) | Field::Product(_) => "space toggle  tab next  shift+tab prev  esc quit",
        field if field.is_date() => "type a date  ctrl+n today  tab next  shift+tab prev  esc quit",
        Field::Description => "enter newline  tab next  shift+tab prev  esc quit",
        _ => "enter submit  tab next  shift+tab prev  esc quit",
    };

    let mut lines = vec![Line::from(Span::styled(
        hint,
        Style::default().fg(Color::DarkGray),
    ))];
    if let Some(status) = &app.status {
        lines.push(Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Green),
        )));
    }
    if let Some(err) = &app.error {
        lines.push(Line::from(Span::styled(
            err.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn render_help(frame: &mut Frame<'_>, area: Rect) {
    let modal = centered_rect(70, 60, area);
    frame.render_widget(Clear, modal);

    let text = vec![
        Line::from("Global: esc quit, Ctrl+C quit, F1 help"),
        Line::from("Customers: j/k or up/down choose, home resets to the placeholder"),
        Line::from("Fields: tab/shift+tab move, left/right cycle choices, space toggles checkboxes"),
        Line::from("Dates: YYYY-MM-DD, DD-MM-YYYY or today; Ctrl+N fills today"),
        Line::from("Description: enter adds a line; Ctrl+U clears, Ctrl+W deletes a word"),
    ];

    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Help"))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, modal);
}

fn date_line(app: &App, field: Field, label: &str) -> Line<'static> {
    field_line(label, app.date_input(field), app.focus == field)
}

fn field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{}: ", label),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(value.to_string(), focus_style(focused)),
    ])
}

fn selector_line(label: &str, value: Option<&str>, focused: bool) -> Line<'static> {
    let value = value.unwrap_or(SENTINEL);
    let shown = if focused {
        format!("< {} >", value)
    } else {
        value.to_string()
    };
    field_line(label, &shown, focused)
}

fn checkbox_line(label: &str, checked: bool, focused: bool) -> Line<'static> {
    let mark = if checked { "[x]" } else { "[ ]" };
    Line::from(Span::styled(
        format!("  {} {}", mark, label),
        focus_style(focused),
    ))
}

fn heading_line(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

fn detail_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{}: ", label),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(value.to_string()),
    ])
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, rect: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(rect);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
