//! Terminal report rendering

use viaplan_core::model::{DateCheck, VacationPlan};

use crate::format::{format_currency, format_date, format_percentage};
use crate::messages::{Lang, message};

/// Render a computed plan as a multi-line report.
pub fn render_plan(plan: &VacationPlan, lang: Lang) -> String {
    let mut out = String::new();

    let total = format_currency(plan.pricing.total_price);
    let adult = format_currency(plan.pricing.adult_unit_price);
    let child = format_currency(plan.pricing.child_unit_price);
    let target = format_currency(plan.savings.savings_target);
    let weekly = format_currency(plan.savings.weekly_deposit);
    let monthly_dep = format_currency(plan.savings.monthly_deposit);
    let loan_amount = format_currency(plan.loan.loan_amount);
    let payment = format_currency(plan.loan.monthly_payment);
    let cap = format_currency(plan.loan.max_monthly_payment);
    let pct = format_percentage(plan.affordability.payment_pct_of_salary);
    let weeks = plan.savings.weeks_to_save;
    let months = plan.loan.loan_term_months;

    match lang {
        Lang::Es => {
            out.push_str(&format!("Paquete: {total} ({adult}/adulto, {child}/niño)\n"));
            out.push_str(&format!(
                "Ahorro: {target} — {weeks} semanas × {weekly} (≈{monthly_dep}/mes)\n"
            ));
            out.push_str(&format!(
                "Crédito: {loan_amount} al 0% — {months} meses × {payment}\n"
            ));
            out.push_str(&format!("Pago mensual: {payment} de {cap} permitidos ({pct})\n"));
        }
        Lang::En => {
            out.push_str(&format!("Package: {total} ({adult}/adult, {child}/child)\n"));
            out.push_str(&format!(
                "Savings: {target} — {weeks} weeks × {weekly} (≈{monthly_dep}/month)\n"
            ));
            out.push_str(&format!(
                "Credit: {loan_amount} at 0% — {months} months × {payment}\n"
            ));
            out.push_str(&format!("Monthly payment: {payment} of {cap} allowed ({pct})\n"));
        }
    }

    match lang {
        Lang::Es => out.push_str(&format!(
            "Primera fecha disponible: {}\n",
            format_date(plan.savings.earliest_check_in)
        )),
        Lang::En => out.push_str(&format!(
            "Earliest available check-in: {}\n",
            format_date(plan.savings.earliest_check_in)
        )),
    }

    if !plan.affordability.is_feasible {
        let intro = match lang {
            Lang::Es => "No viable: excede el tope por",
            Lang::En => "Not feasible: exceeds the cap by",
        };
        let hint = match lang {
            Lang::Es => "ajusta tu ahorro semanal en",
            Lang::En => "adjust your weekly deposit by",
        };
        if let (Some(shortfall), Some(delta)) = (
            plan.affordability.shortfall,
            plan.affordability.suggested_weekly_delta,
        ) {
            out.push_str(&format!(
                "{intro} {} — {hint} {}\n",
                format_currency(shortfall),
                format_currency(delta),
            ));
        }
    }

    out
}

/// Render a date-selection check result.
pub fn render_date_check(check: &DateCheck, lang: Lang) -> String {
    let mut out = String::new();

    if check.valid {
        match lang {
            Lang::Es => out.push_str(&format!("Fechas confirmadas: {} noches\n", check.nights)),
            Lang::En => out.push_str(&format!("Dates confirmed: {} nights\n", check.nights)),
        }
    } else {
        match lang {
            Lang::Es => out.push_str("Fechas no válidas: "),
            Lang::En => out.push_str("Invalid dates: "),
        }
    }

    if let Some(key) = check.message_key {
        out.push_str(message(key, lang));
        if let Some(guaranteed) = check.guaranteed_check_in {
            out.push_str(&format!(" {}", format_date(guaranteed)));
        }
        out.push('\n');
    }

    out
}
