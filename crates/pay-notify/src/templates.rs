//! # Notification Templates
//!
//! HTML bodies for the two admin emails. Caller-supplied values are escaped
//! before interpolation.

use pay_core::{AdminNotification, BookingRequest, PaymentStatusEvent};

/// Subject of the email sent when a checkout is created
pub const PENDING_BOOKING_SUBJECT: &str = "NEW BOOKING – pending payment";

/// Subject of the email sent when SumUp reports a payment
pub const BOOKING_PAID_SUBJECT: &str = "BOOKING PAID";

/// New booking, awaiting payment on checkout `checkout_id`
pub fn pending_booking(booking: &BookingRequest, checkout_id: &str) -> AdminNotification {
    let meta = booking.meta_view();

    let html = format!(
        r#"
<h2>{subject}</h2>
<p><b>Amount:</b> {amount} {currency}</p>
<p><b>Route:</b> {route}</p>
<p><b>Name:</b> {name}</p>
<p><b>Email:</b> {email}</p>
<p><b>Phone:</b> {phone}</p>
<p><b>Pickup:</b> {pickup}</p>
<p><b>Drop-off:</b> {dropoff}</p>
<p><b>Date/Time:</b> {date} {time}</p>
<p><b>Car:</b> {car_class} {car_model}</p>
<p><b>Checkout ID:</b> {checkout_id}</p>
<p><i>Status:</i> awaiting payment</p>
"#,
        subject = PENDING_BOOKING_SUBJECT,
        amount = escape_html(&booking.amount_display()),
        currency = escape_html(&booking.currency),
        route = escape_html(&meta.route),
        name = escape_html(&meta.name),
        email = escape_html(&meta.email),
        phone = escape_html(&meta.phone),
        pickup = escape_html(&meta.pickup),
        dropoff = escape_html(&meta.dropoff),
        date = escape_html(&meta.date),
        time = escape_html(&meta.time),
        car_class = escape_html(&meta.car_class),
        car_model = escape_html(&meta.car_model),
        checkout_id = escape_html(checkout_id),
    );

    AdminNotification::new(PENDING_BOOKING_SUBJECT, html)
}

/// Payment reported by the provider, with the raw event for audit
pub fn booking_paid(event: &PaymentStatusEvent) -> serde_json::Result<AdminNotification> {
    let dump = event.raw_pretty()?;

    let html = format!(
        r#"
<h2>{subject}</h2>
<p><b>Status:</b> {status}</p>
<p><b>Amount:</b> {amount} {currency}</p>
<p><b>Checkout ID:</b> {checkout_id}</p>
<pre style="white-space:pre-wrap;background:#f6f6f6;padding:12px;border-radius:8px;">
{dump}
</pre>
"#,
        subject = BOOKING_PAID_SUBJECT,
        status = escape_html(&event.status),
        amount = escape_html(&event.amount),
        currency = escape_html(&event.currency),
        checkout_id = escape_html(&event.checkout_id),
        dump = escape_html(&dump),
    );

    Ok(AdminNotification::new(BOOKING_PAID_SUBJECT, html))
}

/// Escape text for an HTML element body
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pending_booking_lists_details() {
        let booking = BookingRequest::from_json(&json!({
            "amount": 180,
            "currency": "GBP",
            "meta": {
                "route": "Heathrow → Mayfair",
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "phone": "+44 20 7946 0000",
                "pickup": "Terminal 5",
                "dropoff": "Brook Street",
                "date": "2026-11-02",
                "time": "09:30",
                "carClass": "First",
                "carModel": "S-Class"
            }
        }))
        .unwrap();

        let mail = pending_booking(&booking, "chk_42");

        assert_eq!(mail.subject, "NEW BOOKING – pending payment");
        assert!(mail.html.contains("<b>Amount:</b> 180 GBP"));
        assert!(mail.html.contains("<b>Route:</b> Heathrow → Mayfair"));
        assert!(mail.html.contains("<b>Drop-off:</b> Brook Street"));
        assert!(mail.html.contains("<b>Date/Time:</b> 2026-11-02 09:30"));
        assert!(mail.html.contains("<b>Car:</b> First S-Class"));
        assert!(mail.html.contains("<b>Checkout ID:</b> chk_42"));
        assert!(mail.html.contains("awaiting payment"));
    }

    #[test]
    fn test_pending_booking_blank_meta() {
        let booking = BookingRequest::from_json(&json!({"amount": "95.00"})).unwrap();
        let mail = pending_booking(&booking, "chk_1");

        assert!(mail.html.contains("<b>Amount:</b> 95.00 EUR"));
        assert!(mail.html.contains("<b>Name:</b> </p>"));
        assert!(mail.html.contains("<b>Car:</b>  </p>"));
    }

    #[test]
    fn test_pending_booking_escapes_input() {
        let booking = BookingRequest::from_json(&json!({
            "amount": 10,
            "meta": {"name": "<script>alert(1)</script>"}
        }))
        .unwrap();
        let mail = pending_booking(&booking, "chk_1");

        assert!(!mail.html.contains("<script>"));
        assert!(mail.html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_booking_paid() {
        let event = PaymentStatusEvent {
            status: "SUCCESSFUL".into(),
            amount: "120".into(),
            currency: "EUR".into(),
            checkout_id: "abc123".into(),
            raw: json!({"status": "SUCCESSFUL", "amount": 120, "checkout_id": "abc123"}),
        };

        let mail = booking_paid(&event).unwrap();

        assert_eq!(mail.subject, "BOOKING PAID");
        assert!(mail.html.contains("<h2>BOOKING PAID</h2>"));
        assert!(mail.html.contains("<b>Status:</b> SUCCESSFUL"));
        assert!(mail.html.contains("<b>Amount:</b> 120 EUR"));
        assert!(mail.html.contains("<b>Checkout ID:</b> abc123"));
        assert!(mail.html.contains("\"checkout_id\": \"abc123\""));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & b < c > d"), "a &amp; b &lt; c &gt; d");
        assert_eq!(escape_html("plain"), "plain");
    }
}
