use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::NaiveDate;
use serde::Serialize;
use crate::catalog::Medium;
use crate::customers::Customer;
use crate::utils::date::{days_including, serializer};

// ReservationRecord abstracts a customer waiting to borrow a medium. Records of the same
// reserver, medium and date are equal; their position in the ledger's queue, not the date,
// decides who may borrow first.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize)]
pub struct ReservationRecord {
    reserver: Customer,
    medium: Medium,
    #[serde(with = "serializer")]
    reserved_at: NaiveDate,
}

impl ReservationRecord {
    pub fn new(reserver: &Customer, medium: &Medium, reserved_at: NaiveDate) -> Self {
        Self {
            reserver: reserver.clone(),
            medium: medium.clone(),
            reserved_at,
        }
    }

    pub fn reserver(&self) -> &Customer {
        &self.reserver
    }

    pub fn medium(&self) -> &Medium {
        &self.medium
    }

    pub fn reserved_at(&self) -> NaiveDate {
        self.reserved_at
    }

    pub fn is_reserved_by(&self, customer: &Customer) -> bool {
        &self.reserver == customer
    }

    /// Days the reservation has been waiting up to `today`, counting the first day fully.
    pub fn reservation_days(&self, today: NaiveDate) -> i64 {
        days_including(self.reserved_at, today)
    }
}

impl Display for ReservationRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) reserved on {} by\n{} {} ({})",
               self.medium.title, self.medium.medium_id, self.reserved_at,
               self.reserver.first_name, self.reserver.last_name, self.reserver.customer_id)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use chrono::NaiveDate;
    use crate::catalog::Medium;
    use crate::core::library::MediumKind;
    use crate::customers::Customer;
    use crate::hold::domain::model::ReservationRecord;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2009, 4, day).expect("valid date")
    }

    #[tokio::test]
    async fn test_should_build_reservation() {
        let customer = Customer::new("666999", "paul", "panter");
        let medium = Medium::new("CD1", "baz", MediumKind::Cd);
        let reservation = ReservationRecord::new(&customer, &medium, date(3));
        assert_eq!(&customer, reservation.reserver());
        assert_eq!(&medium, reservation.medium());
        assert_eq!(date(3), reservation.reserved_at());
        assert!(reservation.is_reserved_by(&customer));
        assert!(!reservation.is_reserved_by(&Customer::new("666998", "paula", "panter")));
    }

    #[tokio::test]
    async fn test_should_compare_structurally() {
        let customer = Customer::new("666999", "paul", "panter");
        let medium = Medium::new("CD1", "baz", MediumKind::Cd);
        let first = ReservationRecord::new(&customer, &medium, date(3));
        assert_eq!(first, ReservationRecord::new(&customer, &medium, date(3)));
        assert_ne!(first, ReservationRecord::new(&customer, &medium, date(4)));
        assert_ne!(first, ReservationRecord::new(&customer, &Medium::new("CD2", "baz", MediumKind::Cd), date(3)));
        let set: HashSet<ReservationRecord> = vec![first.clone(), first.clone()].into_iter().collect();
        assert_eq!(1, set.len());
    }

    #[tokio::test]
    async fn test_should_count_reservation_days() {
        let reservation = ReservationRecord::new(&Customer::new("1", "a", "b"),
                                                 &Medium::new("CD1", "baz", MediumKind::Cd), date(3));
        assert_eq!(1, reservation.reservation_days(date(3)));
        assert_eq!(4, reservation.reservation_days(date(6)));
    }
}
