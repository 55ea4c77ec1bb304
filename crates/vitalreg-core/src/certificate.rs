//! Printable certificates.
//!
//! A [`Certificate`] is a fully localized view model: every label has been
//! resolved through a [`Localizer`] at build time, so renderers only lay out
//! strings. [`fmt::Display`] produces a plain-text printable form.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
  i18n::{Language, Localizer},
  record::{
    BirthRecord, DeathRecord, DivorceRecord, MarriageRecord, RecordCategory,
    VitalRecord,
  },
};

/// One labelled value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateField {
  pub label: String,
  pub value: String,
}

/// A group of fields, optionally under a heading (e.g. "Husband").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateSection {
  pub heading: Option<String>,
  pub fields:  Vec<CertificateField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateFooter {
  pub issue_date_label:           String,
  pub issue_date:                 NaiveDate,
  pub official_signature_label:   String,
  pub kebele_administrator_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
  pub language:    Language,
  pub category:    RecordCategory,
  pub regno:       String,
  /// Country, region, office and city lines.
  pub header:      Vec<String>,
  pub title:       String,
  pub sections:    Vec<CertificateSection>,
  pub footer:      CertificateFooter,
  pub print_label: String,
}

// ─── Builder ─────────────────────────────────────────────────────────────────

struct Fields<'l> {
  l10n:   &'l Localizer,
  fields: Vec<CertificateField>,
}

impl<'l> Fields<'l> {
  fn new(l10n: &'l Localizer) -> Self { Self { l10n, fields: Vec::new() } }

  fn row(mut self, key: &str, value: impl Into<String>) -> Self {
    self.fields.push(CertificateField {
      label: self.l10n.t(key).to_owned(),
      value: value.into(),
    });
    self
  }

  fn section(self, heading_key: Option<&str>) -> CertificateSection {
    CertificateSection {
      heading: heading_key.map(|k| self.l10n.t(k).to_owned()),
      fields:  self.fields,
    }
  }
}

fn address(l10n: &Localizer, city: &str, kebele: &str, house: &str) -> String {
  format!("{city}, {kebele}, {} {house}", l10n.t("certificate.field.houseNo"))
}

fn spouse(
  l10n: &Localizer,
  heading_key: &str,
  name: &str,
  age: u8,
  nationality: &str,
) -> CertificateSection {
  Fields::new(l10n)
    .row("certificate.field.fullName", name)
    .row("certificate.field.age", age.to_string())
    .row("certificate.field.nationality", nationality)
    .section(Some(heading_key))
}

fn birth_sections(l10n: &Localizer, r: &BirthRecord) -> Vec<CertificateSection> {
  vec![
    Fields::new(l10n)
      .row("certificate.field.registrationNumber", &r.birth_regno)
      .row("certificate.field.childFullName", &r.child_name)
      .row("certificate.field.dateOfBirth", r.date_of_birth.to_string())
      .row("certificate.field.sex", r.sex.as_str())
      .row("certificate.field.nationality", &r.nationality)
      .row("certificate.field.motherFullName", &r.mother_name)
      .row("certificate.field.fatherFullName", &r.father_name)
      .row(
        "certificate.field.placeOfBirth",
        address(l10n, &r.city, &r.kebele, &r.house_number),
      )
      .row("certificate.field.registrationDate", r.registration_date.to_string())
      .section(None),
  ]
}

fn death_sections(l10n: &Localizer, r: &DeathRecord) -> Vec<CertificateSection> {
  let mut fields = Fields::new(l10n)
    .row("certificate.field.registrationNumber", &r.death_regno)
    .row("certificate.field.fullName", &r.name)
    .row("certificate.field.dateOfBirth", r.date_of_birth.to_string())
    .row("certificate.field.dateOfDeath", r.date_of_death.to_string())
    .row("certificate.field.sex", r.sex.as_str())
    .row("certificate.field.nationality", &r.nationality)
    .row("certificate.field.causeOfDeath", &r.cause_of_death);
  if let Some(birth_regno) = r.birth_regno.as_deref().filter(|s| !s.is_empty()) {
    fields = fields.row("certificate.field.birthRegNumber", birth_regno);
  }
  vec![
    fields
      .row(
        "certificate.field.lastKnownAddress",
        address(l10n, &r.city, &r.kebele, &r.house_number),
      )
      .row("certificate.field.registrationDate", r.registration_date.to_string())
      .section(None),
  ]
}

fn marriage_sections(
  l10n: &Localizer,
  r: &MarriageRecord,
) -> Vec<CertificateSection> {
  vec![
    Fields::new(l10n)
      .row("certificate.field.registrationNumber", &r.marriage_regno)
      .section(None),
    spouse(l10n, "certificate.field.husband", &r.husband_name, r.husband_age, &r.husband_nationality),
    spouse(l10n, "certificate.field.wife", &r.wife_name, r.wife_age, &r.wife_nationality),
    Fields::new(l10n)
      .row("certificate.field.dateOfMarriage", r.date_of_marriage.to_string())
      .row(
        "certificate.field.address",
        address(l10n, &r.city, &r.kebele, &r.house_number),
      )
      .row("certificate.field.registrationDate", r.registration_date.to_string())
      .section(None),
  ]
}

fn divorce_sections(
  l10n: &Localizer,
  r: &DivorceRecord,
) -> Vec<CertificateSection> {
  vec![
    Fields::new(l10n)
      .row("certificate.field.registrationNumber", &r.divorce_regno)
      .section(None),
    spouse(l10n, "certificate.field.husband", &r.husband_name, r.husband_age, &r.husband_nationality),
    spouse(l10n, "certificate.field.wife", &r.wife_name, r.wife_age, &r.wife_nationality),
    Fields::new(l10n)
      .row("certificate.field.dateOfDivorce", r.date_of_divorce.to_string())
      .row("certificate.field.requestedBy", l10n.t(r.requester.label_key()))
      .row(
        "certificate.field.address",
        address(l10n, &r.city, &r.kebele, &r.house_number),
      )
      .row("certificate.field.registrationDate", r.registration_date.to_string())
      .section(None),
  ]
}

impl Certificate {
  /// Build the certificate for `record` in the localizer's language.
  pub fn build(
    record: &VitalRecord,
    l10n: &Localizer,
    issue_date: NaiveDate,
  ) -> Self {
    let (title_key, sections) = match record {
      VitalRecord::Birth(r) => ("certificate.birth.title", birth_sections(l10n, r)),
      VitalRecord::Death(r) => ("certificate.death.title", death_sections(l10n, r)),
      VitalRecord::Marriage(r) => {
        ("certificate.marriage.title", marriage_sections(l10n, r))
      }
      VitalRecord::Divorce(r) => {
        ("certificate.divorce.title", divorce_sections(l10n, r))
      }
    };

    let header = [
      "certificate.header.country",
      "certificate.header.region",
      "certificate.header.office",
      "certificate.header.city",
    ]
    .into_iter()
    .map(|k| l10n.t(k).to_owned())
    .collect();

    Self {
      language: l10n.language(),
      category: record.category(),
      regno: record.regno().to_owned(),
      header,
      title: l10n.t(title_key).to_owned(),
      sections,
      footer: CertificateFooter {
        issue_date_label: l10n.t("certificate.footer.issueDate").to_owned(),
        issue_date,
        official_signature_label: l10n
          .t("certificate.footer.officialSignature")
          .to_owned(),
        kebele_administrator_label: l10n
          .t("certificate.footer.kebeleAdministrator")
          .to_owned(),
      },
      print_label: l10n.t("certificate.actions.print").to_owned(),
    }
  }
}

// ─── Plain-text rendering ────────────────────────────────────────────────────

const RULE: &str =
  "================================================================";

impl fmt::Display for Certificate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{RULE}")?;
    for line in &self.header {
      writeln!(f, "{line}")?;
    }
    writeln!(f, "{RULE}")?;
    writeln!(f)?;
    writeln!(f, "{}", self.title)?;
    for section in &self.sections {
      writeln!(f)?;
      let indent = if let Some(heading) = &section.heading {
        writeln!(f, "{heading}")?;
        "  "
      } else {
        ""
      };
      for field in &section.fields {
        writeln!(f, "{indent}{}: {}", field.label, field.value)?;
      }
    }
    writeln!(f)?;
    writeln!(f, "{RULE}")?;
    writeln!(f, "{}: {}", self.footer.issue_date_label, self.footer.issue_date)?;
    writeln!(f)?;
    writeln!(f, "______________________________")?;
    writeln!(f, "{}", self.footer.official_signature_label)?;
    writeln!(f, "{}", self.footer.kebele_administrator_label)
  }
}
