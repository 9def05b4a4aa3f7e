use colored::Colorize;
use quotelyapp::commands::import::ImportPreview;
use quotelyapp::commands::{CmdMessage, MessageLevel};
use quotelyapp::model::Customer;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 28;
const EMAIL_WIDTH: usize = 32;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

/// One line per customer: name, email, first address line.
pub(super) fn render_customer_list(customers: &[Customer]) -> String {
    let mut out = String::new();
    for customer in customers {
        let name = pad_to_width(&customer.name, NAME_WIDTH);
        let email = pad_to_width(customer.email.as_deref().unwrap_or(""), EMAIL_WIDTH);
        let address = customer
            .address
            .as_deref()
            .and_then(|a| a.lines().next())
            .unwrap_or("");
        let line = format!("{} {} {}", name, email, address);
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

pub(super) fn render_customer(customer: &Customer) -> String {
    let mut out = format!("{}\n", customer.name);
    if let Some(email) = &customer.email {
        out.push_str(&format!("  Email:   {}\n", email));
    }
    if let Some(address) = &customer.address {
        let mut lines = address.lines();
        if let Some(first) = lines.next() {
            out.push_str(&format!("  Address: {}\n", first));
        }
        for line in lines {
            out.push_str(&format!("           {}\n", line));
        }
    }
    out
}

pub(super) fn render_import_preview(preview: &ImportPreview) -> String {
    let mut out = format!(
        "{} contains {} customers",
        preview.source.display(),
        preview.customer_count()
    );
    if let Some(counter) = &preview.snapshot.last_invoice_number {
        out.push_str(&format!(" and invoice counter {}", counter));
    }
    if let Some(at) = preview.snapshot.exported_at() {
        out.push_str(&format!(" (exported {})", at.format("%d/%m/%Y %H:%M")));
    }
    out.push('\n');
    out
}

pub(super) fn render_config(entries: &[(&str, String)]) -> String {
    entries
        .iter()
        .map(|(k, v)| format!("{} = {}\n", k, v))
        .collect()
}

/// Truncates or pads to an exact display width.
fn pad_to_width(s: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    if s.width() > width {
        for c in s.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width.saturating_sub(1) {
                break;
            }
            out.push(c);
            used += w;
        }
        out.push('…');
        used += 1;
    } else {
        out.push_str(s);
        used = s.width();
    }
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotelyapp::backup::BackupSnapshot;
    use std::path::PathBuf;

    #[test]
    fn customer_list_columns_line_up() {
        let out = render_customer_list(&[
            Customer::new("Zoë", Some("z@x.test".into()), Some("1 High St\nLeeds".into())),
            Customer::new("Bob", None, None),
        ]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Zoë"));
        assert_eq!(lines[0].find("z@x.test"), Some("Zoë".len() + NAME_WIDTH - 3 + 1));
        assert!(lines[0].ends_with("1 High St"));
        assert_eq!(lines[1], "Bob");
    }

    #[test]
    fn pad_to_width_truncates_long_names() {
        let padded = pad_to_width("abcdefghij", 5);
        assert_eq!(padded, "abcd…");
        assert_eq!(padded.width(), 5);
    }

    #[test]
    fn customer_detail_shows_all_address_lines() {
        let out = render_customer(&Customer::new(
            "Acme",
            Some("a@acme.test".into()),
            Some("1 Road\nTown".into()),
        ));
        assert!(out.contains("Email:   a@acme.test"));
        assert!(out.contains("Address: 1 Road\n           Town"));
    }

    #[test]
    fn import_preview_mentions_counter() {
        let preview = ImportPreview {
            source: PathBuf::from("b.json"),
            snapshot: BackupSnapshot {
                customers: vec![Customer::new("A", None, None)],
                last_invoice_number: Some("12".into()),
                export_date: Some("2026-01-05T10:00:00.000Z".into()),
            },
        };
        let out = render_import_preview(&preview);
        assert!(out.contains("1 customers"));
        assert!(out.contains("invoice counter 12"));
        assert!(out.contains("05/01/2026 10:00"));
    }

    #[test]
    fn config_is_key_value_lines() {
        let out = render_config(&[("business_name", "Acme".to_string())]);
        assert_eq!(out, "business_name = Acme\n");
    }
}
