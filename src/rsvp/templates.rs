//! HTML templates for the outbound mail documents.
//!
//! Every value coming from the form goes through `html_escape` before being
//! interpolated; settings come from configuration and are trusted.

use super::composer::NotificationSettings;
use crate::dtos::CreateRsvpDTO;
use html_escape::{encode_double_quoted_attribute, encode_text};

const BADGE_STYLE: &str = "background: #ff0080; color: white; padding: 10px; border-radius: 4px;";

/// Body of the alert sent to the couple.
///
/// `after_party_guests` holds the first names that triggered an invitation.
pub fn host_alert_html(record: &CreateRsvpDTO, after_party_guests: &[&str]) -> String {
    let badges: String = after_party_guests
        .iter()
        .map(|name| {
            format!(
                "<p style=\"{}\"><strong>🎉 AFTER-PARTY INVITE SENT to {}!</strong></p>\n",
                BADGE_STYLE,
                encode_text(name)
            )
        })
        .collect();

    let attending_details = if record.attendance.is_attending() {
        let additional_guest = record
            .additional_guest
            .as_ref()
            .map(|guest| {
                format!(
                    "<p><strong>Additional Guest:</strong> {} {}</p>\n",
                    encode_text(&guest.first_name),
                    encode_text(&guest.last_name)
                )
            })
            .unwrap_or_default();

        format!(
            "<p><strong>Number of Guests:</strong> {}</p>\n{}<p><strong>Dietary Restrictions/Allergies:</strong> {}</p>\n",
            record.num_guests,
            additional_guest,
            encode_text(record.allergies.as_deref().unwrap_or("None specified"))
        )
    } else {
        String::new()
    };

    format!(
        r#"<h2>New Wedding RSVP</h2>
{badges}<p><strong>Name:</strong> {first} {last}</p>
<p><strong>Email:</strong> {email}</p>
<p><strong>Phone:</strong> {phone}</p>
<p><strong>Attending:</strong> {attending}</p>
{attending_details}<p><strong>Message:</strong> {message}</p>
<p><strong>Submitted:</strong> {submitted}</p>
"#,
        badges = badges,
        first = encode_text(&record.first_name),
        last = encode_text(&record.last_name),
        email = encode_text(&record.email),
        phone = encode_text(record.phone.as_deref().unwrap_or("N/A")),
        attending = if record.attendance.is_attending() { "Yes" } else { "No" },
        attending_details = attending_details,
        message = encode_text(record.message.as_deref().unwrap_or("N/A")),
        submitted = record.submitted_at.format("%-m/%-d/%Y, %-I:%M:%S %p UTC"),
    )
}

/// Body of the confirmation sent back to the guest
pub fn guest_confirmation_html(record: &CreateRsvpDTO, settings: &NotificationSettings) -> String {
    let guest_message = if record.attendance.is_attending() {
        format!(
            r#"<p>We're thrilled that you'll be joining us on our special day!</p>
<p><strong>Number of guests:</strong> {}</p>
<p><strong>Date:</strong> {}</p>
<p><strong>Location:</strong> {}</p>
<p>We can't wait to celebrate with you!</p>
"#,
            record.num_guests,
            encode_text(&settings.event_date),
            encode_text(&settings.event_location)
        )
    } else {
        "<p>Thank you for letting us know. We're sorry you can't make it, but we appreciate your response.</p>\n<p>We hope to see you soon!</p>\n".to_string()
    };

    format!(
        r#"<h2>Thank you for your RSVP!</h2>
<p>Hi {first},</p>
{guest_message}<p>If you have any questions, please don't hesitate to reach out.</p>
<p>Best wishes,<br>{couple}</p>
"#,
        first = encode_text(&record.first_name),
        guest_message = guest_message,
        couple = encode_text(&settings.couple),
    )
}

/// Body of the secret after-party invitation for one guest
pub fn after_party_html(guest_first_name: &str, settings: &NotificationSettings) -> String {
    let schedule: String = AFTER_PARTY_SCHEDULE
        .iter()
        .enumerate()
        .map(|(i, slot)| schedule_row(slot, i + 1 == AFTER_PARTY_SCHEDULE.len()))
        .collect();

    format!(
        r#"<div style="background: #0a0a0f; padding: 0; font-family: Arial, sans-serif;">
    <div style="background: linear-gradient(135deg, rgba(255,0,128,0.2) 0%, rgba(128,0,255,0.2) 50%, rgba(0,255,255,0.2) 100%); padding: 50px 20px; text-align: center; border-bottom: 2px solid #ff0080;">
        <div style="display: inline-block; border: 2px solid #ff0080; padding: 8px 20px; margin-bottom: 20px;">
            <p style="color: #ff0080; font-size: 12px; text-transform: uppercase; letter-spacing: 4px; margin: 0; font-weight: bold;">Top Secret</p>
        </div>
        <h1 style="color: #ffffff; font-size: 36px; font-weight: 900; text-transform: uppercase; letter-spacing: 4px; margin: 0 0 10px 0;">After Party</h1>
        <p style="color: #00ffff; font-size: 14px; text-transform: uppercase; letter-spacing: 6px; margin: 0;">You've Been Selected</p>
    </div>

    <div style="padding: 50px 40px; text-align: center;">
        <p style="color: #ffffff; font-size: 18px; margin: 0 0 10px 0;">Hey {first},</p>
        <p style="color: #cccccc; font-size: 18px; line-height: 1.8; margin: 0 0 30px 0;">
            You're invited to stay for the <span style="color: #00ffff; font-weight: bold;">real party</span> after the wedding reception ends.
        </p>

        <div style="background: rgba(255, 0, 128, 0.1); border: 1px solid rgba(255, 0, 128, 0.3); border-radius: 8px; padding: 30px; margin: 0 0 30px 0; text-align: left;">
            <p style="color: #ff0080; font-size: 12px; text-transform: uppercase; letter-spacing: 2px; margin: 0 0 15px 0; font-weight: bold;">The Cover Story</p>
            <p style="color: #cccccc; font-size: 16px; line-height: 1.8; margin: 0;">
                When the reception ends at <strong style="color: #ffffff;">9:00 PM</strong>, we'll start ushering guests out. You're on the <span style="color: #ff0080; font-weight: bold;">"clean-up crew"</span>, that's your reason to stay behind.
            </p>
        </div>

        <div style="background: rgba(0, 255, 255, 0.05); border: 1px solid rgba(0, 255, 255, 0.2); border-radius: 8px; padding: 30px; margin: 0 0 30px 0;">
            <p style="color: #00ffff; font-size: 12px; text-transform: uppercase; letter-spacing: 2px; margin: 0 0 20px 0; font-weight: bold;">The Schedule</p>
            <table style="width: 100%; border-collapse: collapse;">
{schedule}            </table>
        </div>

        <p style="color: #888888; font-size: 15px; margin: 0 0 25px 0;">
            Let us know if you can stay for the after-party.
        </p>

        <a href="{url}" style="display: inline-block; background: linear-gradient(135deg, #ff0080 0%, #8000ff 100%); color: #ffffff; text-decoration: none; padding: 18px 50px; font-size: 14px; font-weight: 700; text-transform: uppercase; letter-spacing: 4px; border-radius: 4px;">RSVP FOR AFTER-PARTY</a>
    </div>

    <div style="padding: 30px 40px; text-align: center; border-top: 1px solid rgba(255,0,128,0.3);">
        <div style="display: inline-block; background: rgba(255, 0, 128, 0.1); border: 1px solid #ff0080; border-radius: 4px; padding: 15px 30px;">
            <p style="color: #ff0080; font-size: 12px; text-transform: uppercase; letter-spacing: 3px; margin: 0; font-weight: bold;">🤫 Keep This Secret</p>
        </div>
    </div>

    <div style="background: rgba(255,255,255,0.02); padding: 25px 20px; text-align: center; border-top: 1px solid rgba(255,255,255,0.05);">
        <p style="color: #444444; font-size: 11px; letter-spacing: 2px; margin: 0;">{monogram}</p>
    </div>
</div>
"#,
        first = encode_text(guest_first_name),
        schedule = schedule,
        url = encode_double_quoted_attribute(&settings.after_party_url),
        monogram = encode_text(&settings.monogram),
    )
}

struct ScheduleSlot {
    time: &'static str,
    time_color: &'static str,
    label: &'static str,
    highlight: bool,
}

const AFTER_PARTY_SCHEDULE: &[ScheduleSlot] = &[
    ScheduleSlot {
        time: "9:00 PM",
        time_color: "#ff0080",
        label: "Guests Leave",
        highlight: false,
    },
    ScheduleSlot {
        time: "9:00 - 9:30 PM",
        time_color: "#8000ff",
        label: "\"Clean-Up\"",
        highlight: false,
    },
    ScheduleSlot {
        time: "9:30 - 11:00 PM",
        time_color: "#00ffff",
        label: "THE RAVE",
        highlight: true,
    },
    ScheduleSlot {
        time: "11:00 PM - 12:00 AM",
        time_color: "#00ff80",
        label: "Actual Clean-Up",
        highlight: false,
    },
];

fn schedule_row(slot: &ScheduleSlot, last: bool) -> String {
    let border = if last {
        ""
    } else {
        " border-bottom: 1px solid rgba(255,255,255,0.1);"
    };
    let label_style = if slot.highlight {
        "color: #00ffff; font-size: 15px; font-weight: bold;"
    } else {
        "color: #ffffff; font-size: 15px;"
    };

    format!(
        r#"                <tr>
                    <td style="padding: 12px 0;{border}">
                        <span style="color: {color}; font-size: 13px; font-weight: bold;">{time}</span>
                    </td>
                    <td style="padding: 12px 0;{border} text-align: right;">
                        <span style="{label_style}">{label}</span>
                    </td>
                </tr>
"#,
        border = border,
        color = slot.time_color,
        time = slot.time,
        label_style = label_style,
        label = encode_text(slot.label),
    )
}
