use chrono::NaiveDate;
use crate::catalog::Medium;
use crate::checkout::domain::model::LoanRecord;
use crate::core::library::{LibraryResult, MediumStatus};
use crate::customers::Customer;
use crate::hold::domain::model::ReservationRecord;
use crate::ledger::notifier::{ChangeObserver, ObserverHandle};

pub mod service;

/// LendingLedger owns which customer holds which medium and who queued for it next.
///
/// Every operation takes its media in caller order. Mutations check all of their
/// preconditions before touching any state and fail with
/// `LibraryError::PreconditionViolated` (or `NotFound` for subjects unknown to the
/// registries). Once the checks passed, a batch is applied item by item; a failing event
/// recorder stops the batch with `LibraryError::Recording` but keeps the items already
/// applied. Observers are informed once per mutating call.
pub trait LendingLedger: Send {
    // loans
    fn lend_to(&mut self, customer: &Customer, media: &[Medium], date: NaiveDate) -> LibraryResult<()>;
    fn return_media(&mut self, media: &[Medium], date: NaiveDate) -> LibraryResult<()>;
    fn is_lendable(&self, customer: &Customer, media: &[Medium]) -> LibraryResult<bool>;
    fn borrower_of(&self, medium: &Medium) -> LibraryResult<Customer>;
    fn loaned_media_of(&self, customer: &Customer) -> LibraryResult<Vec<Medium>>;
    fn loans(&self) -> Vec<LoanRecord>;
    fn loans_of(&self, customer: &Customer) -> LibraryResult<Vec<LoanRecord>>;
    fn loan_of(&self, medium: &Medium) -> LibraryResult<LoanRecord>;
    fn is_loaned(&self, medium: &Medium) -> LibraryResult<bool>;
    fn are_all_loaned(&self, media: &[Medium]) -> LibraryResult<bool>;
    fn are_none_loaned(&self, media: &[Medium]) -> LibraryResult<bool>;
    fn is_loaned_to(&self, customer: &Customer, medium: &Medium) -> LibraryResult<bool>;
    fn are_all_loaned_to(&self, customer: &Customer, media: &[Medium]) -> LibraryResult<bool>;

    // reservations
    fn reserve(&mut self, customer: &Customer, media: &[Medium], date: NaiveDate) -> LibraryResult<()>;
    fn is_reservable(&self, customer: &Customer, media: &[Medium]) -> LibraryResult<bool>;
    fn cancel_reservation(&mut self, medium: &Medium, date: NaiveDate, customer: &Customer) -> LibraryResult<()>;
    fn cancel_reservations(&mut self, media: &[Medium], date: NaiveDate, customer: &Customer) -> LibraryResult<()>;
    fn reservations_of(&self, medium: &Medium) -> LibraryResult<Vec<ReservationRecord>>;
    fn reservers_of(&self, medium: &Medium) -> LibraryResult<Vec<Customer>>;
    fn reserved_media_of(&self, customer: &Customer) -> LibraryResult<Vec<Medium>>;
    fn all_reservations(&self) -> Vec<ReservationRecord>;
    fn reservation_of(&self, customer: &Customer, medium: &Medium) -> LibraryResult<ReservationRecord>;
    fn first_reserver_of(&self, medium: &Medium) -> LibraryResult<Customer>;
    fn is_reserved(&self, medium: &Medium) -> LibraryResult<bool>;
    fn are_all_reserved(&self, media: &[Medium]) -> LibraryResult<bool>;
    fn are_none_reserved(&self, media: &[Medium]) -> LibraryResult<bool>;
    fn is_reserved_by(&self, customer: &Customer, medium: &Medium) -> LibraryResult<bool>;
    fn are_all_reserved_by(&self, customer: &Customer, media: &[Medium]) -> LibraryResult<bool>;
    fn is_first_reserver(&self, customer: &Customer, medium: &Medium) -> LibraryResult<bool>;
    fn is_first_reserver_for_all(&self, customer: &Customer, media: &[Medium]) -> LibraryResult<bool>;

    // registries
    fn contains_customer(&self, customer: &Customer) -> bool;
    fn contains_medium(&self, medium: &Medium) -> bool;
    fn contains_media(&self, media: &[Medium]) -> bool;
    fn status_of(&self, medium: &Medium) -> LibraryResult<MediumStatus>;

    // observers
    fn register_observer(&mut self, observer: Box<dyn ChangeObserver>) -> ObserverHandle;
    fn unregister_observer(&mut self, handle: ObserverHandle) -> bool;
}
