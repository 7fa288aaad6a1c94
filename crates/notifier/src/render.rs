//! HTML rendering for notification emails.
//!
//! The layout is fixed (`templates/notification.html`): a branded header, the
//! subject, the sender line, a preview of the message and a footer. Rendering
//! is a pure function of the validated notification.

use askama::Template;

use relay_common::types::ValidatedNotification;

/// Maximum number of characters of the message embedded in the email.
pub const MESSAGE_PREVIEW_CHARS: usize = 200;

/// Return at most the first [`MESSAGE_PREVIEW_CHARS`] characters of `message`.
///
/// Counts Unicode scalar values, so a multi-byte character is never split.
pub fn truncate_message(message: &str) -> &str {
    match message.char_indices().nth(MESSAGE_PREVIEW_CHARS) {
        Some((byte_idx, _)) => &message[..byte_idx],
        None => message,
    }
}

/// The branded notification document, with interpolated fields HTML-escaped.
#[derive(Template)]
#[template(path = "notification.html")]
struct NotificationEmail<'a> {
    subject: &'a str,
    from_user: &'a str,
    preview: &'a str,
}

/// The same document with fields interpolated verbatim.
#[derive(Template)]
#[template(path = "notification.html", escape = "none")]
struct VerbatimNotificationEmail<'a> {
    subject: &'a str,
    from_user: &'a str,
    preview: &'a str,
}

/// Build the HTML body for a notification.
///
/// With `escape` off, `subject`, `from_user` and the message preview are
/// interpolated verbatim. The message is truncated before rendering. Both
/// templates only interpolate `&str`, so an error here means the formatter
/// itself failed.
pub fn render_email(
    notification: &ValidatedNotification,
    escape: bool,
) -> Result<String, askama::Error> {
    let subject = notification.subject.as_str();
    let from_user = notification.from_user.as_str();
    let preview = truncate_message(&notification.message);

    if escape {
        NotificationEmail {
            subject,
            from_user,
            preview,
        }
        .render()
    } else {
        VerbatimNotificationEmail {
            subject,
            from_user,
            preview,
        }
        .render()
    }
}
