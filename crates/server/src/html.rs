//! HTML pages served to the browser.
//!
//! Every interpolated value goes through [`escape`].

use axum::http::StatusCode;
use engine::{Entry, Kind, Summary, Totals};

const ICONS: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css";
const BACK_HOME: &str = "<br><a href='/'><i class='fas fa-arrow-left'></i> Back to Home</a>";

pub(crate) fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html><head><meta charset='UTF-8'>\
         <title>{title}</title>\
         <link rel='stylesheet' type='text/css' href='/style.css'>\
         <link rel='stylesheet' href='{ICONS}'>\
         </head><body>\n{body}\n</body></html>\n"
    )
}

pub(crate) fn home(entries: &[Entry], currency: &str) -> String {
    let currency = escape(currency);
    let mut body = String::from(
        "<h1><i class='fas fa-book'></i> Personal Finance Tracker</h1>\n\
         <a href='/add'><i class='fas fa-plus'></i> Add Entry</a> |\n\
         <a href='/summary'><i class='fas fa-chart-bar'></i> View Summary</a><br><br>\n\
         <table border='1'><tr><th>Date</th><th>Type</th><th>Category</th>\
         <th>Amount</th><th>Description</th><th>Actions</th></tr>\n",
    );
    for (index, entry) in entries.iter().enumerate() {
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{currency}{}</td><td>{}</td>\
             <td><a href='/edit?index={index}'>✏️ Edit</a></td></tr>\n",
            escape(&entry.date),
            escape(entry.kind.as_str()),
            escape(&entry.category),
            escape(&entry.amount.to_string()),
            escape(&entry.description),
        ));
    }
    body.push_str("</table>");
    layout("Finance Tracker", &body)
}

/// A stored label other than income or expense is listed first so the
/// form shows what the row holds.
fn kind_options(selected: Option<&Kind>) -> String {
    let mut kinds = vec![Kind::Income, Kind::Expense];
    if let Some(other @ Kind::Other(_)) = selected {
        kinds.insert(0, other.clone());
    }
    kinds
        .iter()
        .map(|kind| {
            let marker = if selected == Some(kind) { " selected" } else { "" };
            let label = escape(kind.as_str());
            format!("<option value='{label}'{marker}>{label}</option>")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fields shared by the add and edit forms.
fn entry_fields(entry: Option<&Entry>) -> String {
    let value = |field: Option<String>| {
        field
            .map(|v| format!(" value='{}'", escape(&v)))
            .unwrap_or_default()
    };
    format!(
        "Date (DD-MM-YYYY): <input type='text' name='date'{}><br>\n\
         Type: <select name='type'>\n{}\n</select><br>\n\
         Category: <input type='text' name='category'{}><br>\n\
         Amount: <input type='text' name='amount'{}><br>\n\
         Description: <input type='text' name='description'{}><br>\n",
        value(entry.map(|e| e.date.clone())),
        kind_options(entry.map(|e| &e.kind)),
        value(entry.map(|e| e.category.clone())),
        value(entry.map(|e| e.amount.to_string())),
        value(entry.map(|e| e.description.clone())),
    )
}

pub(crate) fn add_form() -> String {
    let body = format!(
        "<h2><i class='fas fa-plus'></i> Add New Entry</h2>\n\
         <form method='POST' action='/submit'>\n{}\
         <input type='submit' value='Add Entry'>\n</form>\n{BACK_HOME}",
        entry_fields(None)
    );
    layout("Add Entry", &body)
}

pub(crate) fn edit_form(index: usize, entry: &Entry) -> String {
    let body = format!(
        "<h2><i class='fas fa-pen'></i> Edit Entry</h2>\n\
         <form method='POST' action='/update'>\n\
         <input type='hidden' name='index' value='{index}'>\n{}\
         <input type='submit' value='Update Entry'>\n</form>\n{BACK_HOME}",
        entry_fields(Some(entry))
    );
    layout("Edit Entry", &body)
}

fn totals_list(totals: &Totals, currency: &str) -> String {
    totals
        .iter()
        .map(|(key, total)| format!("<li>{}: {currency}{total}</li>", escape(key)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn summary(summary: &Summary, currency: &str) -> String {
    let currency = escape(currency);
    let body = format!(
        "<h2><i class='fas fa-chart-pie'></i> Summary by Category</h2><ul>\n{}\n</ul>\n\
         <h2><i class='fas fa-calendar-alt'></i> Summary by Month</h2><ul>\n{}\n</ul>\n{BACK_HOME}",
        totals_list(&summary.by_category, &currency),
        totals_list(&summary.by_month, &currency),
    );
    layout("Summary", &body)
}

pub(crate) fn error_page(status: StatusCode, message: &str) -> String {
    let body = format!(
        "<h2>{}</h2>\n<p>{}</p>\n{BACK_HOME}",
        escape(&status.to_string()),
        escape(message)
    );
    layout("Error", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::Amount;

    #[test]
    fn escape_replaces_markup() {
        assert_eq!(
            escape("<b>Tom & 'Jerry'</b>\""),
            "&lt;b&gt;Tom &amp; &#39;Jerry&#39;&lt;/b&gt;&quot;"
        );
        assert_eq!(escape("plain ₹"), "plain ₹");
    }

    #[test]
    fn home_links_rows_by_position() {
        let entries = vec![
            Entry::new("01-03-2024", Kind::Income, "Salary", 500, "pay"),
            Entry::new("02-03-2024", Kind::Expense, "Food", 20, "<lunch>"),
        ];
        let page = home(&entries, "₹");

        assert!(page.contains("href='/edit?index=0'"));
        assert!(page.contains("href='/edit?index=1'"));
        assert!(page.contains("<td>₹500</td>"));
        assert!(page.contains("&lt;lunch&gt;"));
    }

    #[test]
    fn edit_form_selects_current_kind() {
        let entry = Entry::new("02-03-2024", Kind::Expense, "Food", 20, "it's");
        let page = edit_form(3, &entry);

        assert!(page.contains("name='index' value='3'"));
        assert!(page.contains("<option value='Expense' selected>Expense</option>"));
        assert!(page.contains("<option value='Income'>Income</option>"));
        assert!(page.contains("value='it&#39;s'"));
    }

    #[test]
    fn unparsed_rows_render_verbatim() {
        let kind = Kind::Other("Transfer".to_string());
        let mut entry = Entry::new("02-03-2024", kind, "Savings", 0, "");
        entry.amount = Amount::Unparsed("12.50".to_string());

        let page = home(std::slice::from_ref(&entry), "₹");
        assert!(page.contains("<td>Transfer</td>"));
        assert!(page.contains("<td>₹12.50</td>"));

        let page = edit_form(0, &entry);
        assert!(page.contains("<option value='Transfer' selected>Transfer</option>"));
        assert!(page.contains("name='amount' value='12.50'"));
    }

    #[test]
    fn add_form_posts_to_submit() {
        let page = add_form();

        assert!(page.contains("action='/submit'"));
        assert!(!page.contains(" selected"));
    }

    #[test]
    fn summary_lists_totals_in_order() {
        let mut by_category = Totals::new();
        by_category.add("Rent", 900).unwrap();
        by_category.add("Food", 150).unwrap();
        let mut by_month = Totals::new();
        by_month.add("March", 1050).unwrap();
        let page = summary(
            &Summary {
                by_category,
                by_month,
            },
            "$",
        );

        let rent = page.find("<li>Rent: $900</li>").unwrap();
        let food = page.find("<li>Food: $150</li>").unwrap();
        assert!(rent < food);
        assert!(page.contains("<li>March: $1050</li>"));
    }
}
