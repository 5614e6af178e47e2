use chrono::NaiveDate;

use crate::calendar::{MonthAttendance, UserMonth};

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 2rem; }
table { border-collapse: collapse; }
th, td { border: 1px solid #ccc; padding: 4px; text-align: center; font-size: 0.8rem; }
td.present { background: #d4f7d4; }
td.name { text-align: left; white-space: nowrap; }
nav a { margin-right: 1rem; }
"#;

/// Renders the month calendar page: one row per user, one column per day.
pub fn render_month(data: &MonthAttendance) -> String {
    let title = data.month.title();
    let (prev_year, prev_month) = data.month.previous();
    let (next_year, next_month) = data.month.next();

    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!(
        "<title>Attendance - {title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <h1>Attendance for {title}</h1>\n",
        title = escape(&title)
    ));
    html.push_str(&format!(
        "<nav><a href=\"/?year={prev_year}&amp;month={prev_month}\">&larr; Previous</a>\
         <a href=\"/?year={next_year}&amp;month={next_month}\">Next &rarr;</a></nav>\n"
    ));

    if data.users.is_empty() {
        html.push_str("<p>No attendance data available.</p>\n");
    } else {
        html.push_str("<table>\n<thead>\n<tr><th>Name</th>");
        for day in 1..=data.num_days {
            html.push_str(&format!("<th>{day}</th>"));
        }
        html.push_str("<th>Days</th></tr>\n</thead>\n<tbody>\n");

        for user in &data.users {
            render_user_row(&mut html, data, user);
        }

        html.push_str("</tbody>\n</table>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_user_row(html: &mut String, data: &MonthAttendance, user: &UserMonth) {
    html.push_str(&format!("<tr><td class=\"name\">{}</td>", escape(&user.name)));

    for day in 1..=data.num_days {
        let check_ins = NaiveDate::from_ymd_opt(data.month.year(), data.month.month(), day)
            .map(|date| user.check_ins_on(date))
            .unwrap_or(&[]);

        if check_ins.is_empty() {
            html.push_str("<td></td>");
        } else {
            let times: Vec<String> = check_ins
                .iter()
                .map(|t| t.format("%H:%M").to_string())
                .collect();
            html.push_str(&format!("<td class=\"present\">{}</td>", times.join("<br>")));
        }
    }

    html.push_str(&format!("<td>{}</td></tr>\n", user.days_present()));
}

/// Minimal HTML escaping for text content and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{SelectedMonth, aggregate_month};
    use crate::model::attendance::MonthRow;
    use crate::model::user::User;
    use chrono::NaiveDateTime;

    fn month(year: i32, month: u32) -> SelectedMonth {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        SelectedMonth::resolve(Some(year), Some(month), today)
    }

    fn row(user_id: u64, name: &str, at: &str) -> MonthRow {
        MonthRow {
            user_id,
            name: name.to_string(),
            clock_in: Some(NaiveDateTime::parse_from_str(at, "%Y-%m-%d %H:%M").unwrap()),
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("<b>\"Tom\" & 'Jerry'</b>"), "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
        assert_eq!(escape("Alice"), "Alice");
    }

    #[test]
    fn test_empty_month_renders_placeholder() {
        let html = render_month(&MonthAttendance::empty(month(2024, 2)));

        assert!(html.contains("Attendance for February 2024"));
        assert!(html.contains("No attendance data available."));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn test_one_column_per_day() {
        let users = vec![User { id: 1, name: "Alice".to_string() }];
        let html = render_month(&aggregate_month(month(2024, 2), &users, &[]));

        assert!(html.contains("<th>29</th>"));
        assert!(!html.contains("<th>30</th>"));
    }

    #[test]
    fn test_check_in_times_in_cells() {
        let users = vec![User { id: 1, name: "Alice".to_string() }];
        let rows = vec![
            row(1, "Alice", "2024-03-01 09:00"),
            row(1, "Alice", "2024-03-01 09:05"),
            row(1, "Alice", "2024-03-02 08:55"),
        ];
        let html = render_month(&aggregate_month(month(2024, 3), &users, &rows));

        assert!(html.contains("<td class=\"present\">09:00<br>09:05</td>"));
        assert!(html.contains("<td class=\"present\">08:55</td>"));
        assert!(html.contains("<td>2</td></tr>"));
    }

    #[test]
    fn test_names_are_escaped() {
        let users = vec![User { id: 1, name: "<script>".to_string() }];
        let html = render_month(&aggregate_month(month(2024, 3), &users, &[]));

        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<td class=\"name\"><script>"));
    }

    #[test]
    fn test_navigation_wraps_year() {
        let html = render_month(&MonthAttendance::empty(month(2024, 1)));

        assert!(html.contains("/?year=2023&amp;month=12"));
        assert!(html.contains("/?year=2024&amp;month=2"));
    }
}
