//! Plain-text invoice receipt

use std::fmt::{self, Write as _};

use hospeda_common::BillingConfig;
use hospeda_core::{
    round_for_display, Invoice, InvoiceStatus, InvoiceTotals, PaymentMethod, Reservation,
    RoomStay,
};
use rust_decimal::Decimal;

const RULE: &str = "----------------------------------------";

/// Printable receipt for one invoice
///
/// `totals` must come from the invoice's own calculator draft.
pub struct Receipt<'a> {
    invoice: &'a Invoice,
    totals: InvoiceTotals,
    billing: &'a BillingConfig,
}

impl<'a> Receipt<'a> {
    pub fn new(invoice: &'a Invoice, totals: InvoiceTotals, billing: &'a BillingConfig) -> Self {
        Self {
            invoice,
            totals,
            billing,
        }
    }

    fn money(&self, amount: Decimal) -> String {
        format!("{} {}", round_for_display(amount), self.billing.currency_symbol)
    }

    /// Money, or a dash when the amount could not be computed
    fn money_or_dash(&self, amount: Option<Decimal>) -> String {
        amount.map_or_else(|| "-".to_string(), |amount| self.money(amount))
    }

    fn write_company(&self, out: &mut String) -> fmt::Result {
        writeln!(out, "{}", self.billing.company_name)?;
        if !self.billing.tax_id.is_empty() {
            writeln!(out, "Tax ID: {}", self.billing.tax_id)?;
        }
        if !self.billing.address.is_empty() {
            writeln!(out, "{}", self.billing.address)?;
        }
        Ok(())
    }

    fn write_guest(&self, out: &mut String) -> fmt::Result {
        let guest = self
            .invoice
            .reservation
            .as_ref()
            .and_then(|r| r.guest.as_ref());
        let Some(guest) = guest else {
            return writeln!(out, "Guest: -");
        };

        writeln!(out, "Guest: {}", guest.full_name())?;
        writeln!(out, "Document: {}", guest.identity_document)?;
        if let Some(phone) = &guest.phone {
            writeln!(out, "Phone: {phone}")?;
        }
        if let Some(email) = &guest.email {
            writeln!(out, "Email: {email}")?;
        }
        Ok(())
    }

    fn write_room_line(&self, out: &mut String, reservation: &Reservation) -> fmt::Result {
        let nights = reservation.range.nights().unwrap_or(0);
        let rate = reservation.nightly_rate().ok();
        let amount = rate.and_then(|nightly_rate| {
            RoomStay {
                range: reservation.range,
                nightly_rate,
            }
            .subtotal()
            .ok()
        });
        writeln!(
            out,
            "1. Room {} - {} to {} - {} night(s) x {} = {}",
            reservation.room_labels(),
            reservation.range.check_in,
            reservation.range.check_out,
            nights,
            self.money_or_dash(rate),
            self.money_or_dash(amount),
        )
    }

    fn write_services(&self, out: &mut String) -> fmt::Result {
        writeln!(out, "Services")?;
        let stay = self
            .invoice
            .reservation
            .as_ref()
            .filter(|r| !r.lines.is_empty());

        if stay.is_none() && self.invoice.lines.is_empty() {
            return writeln!(out, "No details");
        }

        let mut index = 1;
        if let Some(reservation) = stay {
            self.write_room_line(out, reservation)?;
            index += 1;
        }
        for line in &self.invoice.lines {
            writeln!(
                out,
                "{index}. {} - Quantity {} - Unit price {} - Subtotal {}",
                line.description,
                line.quantity,
                self.money(line.unit_price),
                self.money_or_dash(line.subtotal().ok()),
            )?;
            index += 1;
        }
        Ok(())
    }

    fn write_totals(&self, out: &mut String) -> fmt::Result {
        writeln!(out, "Subtotal: {}", self.money(self.totals.subtotal))?;
        let percent = self.invoice.discount.value();
        if percent > Decimal::ZERO {
            writeln!(
                out,
                "Discount ({}%): -{}",
                percent.normalize(),
                self.money(self.totals.discount_amount)
            )?;
        }
        writeln!(out, "TOTAL: {}", self.money(self.totals.total))
    }

    /// Render the receipt as text
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_into(&mut out);
        out
    }

    fn write_into(&self, out: &mut String) -> fmt::Result {
        self.write_company(out)?;
        writeln!(out, "{RULE}")?;
        writeln!(out, "INVOICE #{}", self.invoice.id)?;
        writeln!(out, "Date: {}", self.invoice.issued_on)?;
        writeln!(out, "{RULE}")?;
        self.write_guest(out)?;
        writeln!(out, "{RULE}")?;
        writeln!(out, "Status: {}", status_label(self.invoice.status))?;
        writeln!(
            out,
            "Payment method: {}",
            payment_label(self.invoice.payment_method)
        )?;
        writeln!(out, "{RULE}")?;
        self.write_services(out)?;
        writeln!(out, "{RULE}")?;
        self.write_totals(out)
    }
}

fn status_label(status: InvoiceStatus) -> &'static str {
    match status {
        InvoiceStatus::Pending => "Pending",
        InvoiceStatus::Paid => "Paid",
        InvoiceStatus::Voided => "Voided",
    }
}

fn payment_label(method: PaymentMethod) -> &'static str {
    match method {
        PaymentMethod::Cash => "Cash",
        PaymentMethod::Card => "Card",
        PaymentMethod::Transfer => "Bank transfer",
    }
}
