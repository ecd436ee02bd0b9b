use crate::domain::entities::submission::WaitlistSubmission;

const BRAND_NAME: &str = "Bands";

fn field_row(label: &str, value: &str) -> String {
    format!(
        r#"<p style="margin:6px 0;color:#111827;"><strong>{label}:</strong> {value}</p>"#
    )
}

/// Internal notification sent to the team for every signup.
/// Returns `(subject, html)`.
pub fn waitlist_notification_email(submission: &WaitlistSubmission) -> (String, String) {
    let subject = format!("New Waitlist Signup: {}", submission.name);

    let mut rows = String::new();
    rows.push_str(&field_row("Name", &submission.name));
    rows.push_str(&field_row("Email", &submission.email));
    if let Some(company) = &submission.company {
        rows.push_str(&field_row("Company", company));
    }
    if let Some(role) = &submission.role {
        rows.push_str(&field_row("Role", role));
    }
    if let Some(message) = &submission.message {
        rows.push_str(&format!(
            r#"<p style="margin:6px 0;color:#111827;"><strong>Message:</strong></p><p style="margin:6px 0;color:#374151;">{message}</p>"#
        ));
    }

    let submitted_at = submission
        .submitted_at
        .format("%Y-%m-%d %H:%M:%S UTC")
        .to_string();

    let html = wrap_email("New Waitlist Submission", &rows, &submitted_at);
    (subject, html)
}

pub fn wrap_email(headline: &str, body_html: &str, submitted_at: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <body style="background:#f8fafc;margin:0;padding:24px;font-family:Arial,Helvetica,sans-serif;">
    <div style="max-width:560px;margin:0 auto;background:#ffffff;border:1px solid #e5e7eb;border-radius:12px;padding:24px;">
      <div style="font-size:12px;letter-spacing:0.08em;text-transform:uppercase;color:#6b7280;">{brand}</div>
      <h2 style="margin:12px 0 8px;font-size:22px;color:#111827;">{headline}</h2>
      {body_html}
      <hr style="margin:20px 0 12px;border:none;border-top:1px solid #e5e7eb;" />
      <p style="margin:0;font-size:13px;color:#6b7280;"><em>Submitted at: {submitted_at}</em></p>
    </div>
  </body>
</html>
"#,
        brand = BRAND_NAME,
        headline = headline,
        body_html = body_html,
        submitted_at = submitted_at,
    )
}
