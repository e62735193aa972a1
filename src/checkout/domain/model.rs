use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::NaiveDate;
use serde::Serialize;
use crate::catalog::Medium;
use crate::customers::Customer;
use crate::utils::date::{days_including, serializer};

// LoanRecord abstracts one active loan of one medium to one customer. It is created when
// the medium is lent and dropped by the ledger when the medium comes back.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize)]
pub struct LoanRecord {
    borrower: Customer,
    medium: Medium,
    #[serde(with = "serializer")]
    loaned_at: NaiveDate,
}

impl LoanRecord {
    pub fn new(borrower: &Customer, medium: &Medium, loaned_at: NaiveDate) -> Self {
        Self {
            borrower: borrower.clone(),
            medium: medium.clone(),
            loaned_at,
        }
    }

    pub fn borrower(&self) -> &Customer {
        &self.borrower
    }

    pub fn medium(&self) -> &Medium {
        &self.medium
    }

    pub fn loaned_at(&self) -> NaiveDate {
        self.loaned_at
    }

    /// Loan duration in days up to `today`; the day of lending counts as a full day.
    pub fn loan_days(&self, today: NaiveDate) -> i64 {
        days_including(self.loaned_at, today)
    }
}

impl Display for LoanRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) loaned on {} to\n{} {} ({})",
               self.medium.title, self.medium.medium_id, self.loaned_at,
               self.borrower.first_name, self.borrower.last_name, self.borrower.customer_id)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::catalog::Medium;
    use crate::checkout::domain::model::LoanRecord;
    use crate::core::library::MediumKind;
    use crate::customers::Customer;

    #[tokio::test]
    async fn test_should_build_loan() {
        let customer = Customer::new("123456", "ich", "du");
        let medium = Medium::new("CD1", "baz", MediumKind::Cd);
        let date = NaiveDate::from_ymd_opt(2009, 4, 3).expect("valid date");
        let loan = LoanRecord::new(&customer, &medium, date);
        assert_eq!(&customer, loan.borrower());
        assert_eq!(&medium, loan.medium());
        assert_eq!(date, loan.loaned_at());
        assert_eq!(loan, LoanRecord::new(&customer, &medium, date));
    }

    #[tokio::test]
    async fn test_should_count_loan_days() {
        let loan = LoanRecord::new(&Customer::new("1", "a", "b"), &Medium::new("CD1", "baz", MediumKind::Cd),
                                   NaiveDate::from_ymd_opt(2009, 4, 3).expect("valid date"));
        assert_eq!(1, loan.loan_days(NaiveDate::from_ymd_opt(2009, 4, 3).expect("valid date")));
        assert_eq!(10, loan.loan_days(NaiveDate::from_ymd_opt(2009, 4, 12).expect("valid date")));
    }

    #[tokio::test]
    async fn test_should_format_loan() {
        let loan = LoanRecord::new(&Customer::new("1", "paul", "panter"), &Medium::new("CD1", "baz", MediumKind::Cd),
                                   NaiveDate::from_ymd_opt(2009, 4, 3).expect("valid date"));
        assert_eq!("baz (CD1) loaned on 2009-04-03 to\npaul panter (1)", loan.to_string().as_str());
    }
}
