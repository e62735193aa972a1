use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use chrono::NaiveDate;
use tracing::{debug, info, warn};
use crate::catalog::{Catalog, Medium};
use crate::checkout::domain::model::LoanRecord;
use crate::core::domain::Configuration;
use crate::core::events::LedgerEvent;
use crate::core::library::{LibraryError, LibraryResult, MediumStatus};
use crate::customers::{Customer, CustomerRegistry};
use crate::gateway::events::EventRecorder;
use crate::hold::domain::model::ReservationRecord;
use crate::ledger::domain::LendingLedger;
use crate::ledger::notifier::{ChangeNotifier, ChangeObserver, ObserverHandle};

pub struct LendingLedgerImpl {
    branch_id: String,
    max_reservations: usize,
    loans: HashMap<Medium, LoanRecord>,
    reservations: HashMap<Medium, Vec<ReservationRecord>>,
    customer_registry: Arc<dyn CustomerRegistry>,
    catalog: Arc<dyn Catalog>,
    event_recorder: Box<dyn EventRecorder>,
    notifier: ChangeNotifier,
}

impl LendingLedgerImpl {
    pub fn new(config: &Configuration, customer_registry: Arc<dyn CustomerRegistry>,
               catalog: Arc<dyn Catalog>, event_recorder: Box<dyn EventRecorder>,
               initial_loans: Vec<LoanRecord>) -> LibraryResult<Self> {
        // every medium in stock starts with an empty reservation queue
        let reservations = catalog.list_media().into_iter()
            .map(|medium| (medium, Vec::new()))
            .collect();
        let mut ledger = Self {
            branch_id: config.branch_id.to_string(),
            max_reservations: config.max_reservations,
            loans: HashMap::new(),
            reservations,
            customer_registry,
            catalog,
            event_recorder,
            notifier: ChangeNotifier::new(),
        };
        for loan in initial_loans {
            ledger.ensure_customer(loan.borrower())?;
            ledger.ensure_medium(loan.medium())?;
            if ledger.loans.contains_key(loan.medium()) {
                return Err(LibraryError::precondition(format!("initial stock lends medium {} twice",
                                                              loan.medium().medium_id).as_str(), Some("400".to_string())));
            }
            ledger.loans.insert(loan.medium().clone(), loan);
        }
        info!(branch = %ledger.branch_id, loans = ledger.loans.len(),
            media = ledger.reservations.len(), "lending ledger ready");
        Ok(ledger)
    }

    fn ensure_customer(&self, customer: &Customer) -> LibraryResult<()> {
        if self.customer_registry.contains_customer(customer) {
            Ok(())
        } else {
            Err(LibraryError::not_found(format!("customer {} is not registered",
                                                customer.customer_id).as_str()))
        }
    }

    fn ensure_medium(&self, medium: &Medium) -> LibraryResult<()> {
        if self.catalog.contains_medium(medium) {
            Ok(())
        } else {
            Err(LibraryError::not_found(format!("medium {} is not in stock",
                                                medium.medium_id).as_str()))
        }
    }

    fn ensure_media(&self, media: &[Medium]) -> LibraryResult<()> {
        if media.is_empty() {
            return Err(LibraryError::precondition("media must not be empty", Some("400".to_string())));
        }
        media.iter().try_for_each(|medium| self.ensure_medium(medium))
    }

    fn ensure_distinct(media: &[Medium]) -> LibraryResult<()> {
        let mut seen = HashSet::new();
        for medium in media {
            if !seen.insert(medium) {
                return Err(LibraryError::precondition(format!("medium {} is listed twice",
                                                              medium.medium_id).as_str(), Some("400".to_string())));
            }
        }
        Ok(())
    }

    fn queue(&self, medium: &Medium) -> &[ReservationRecord] {
        self.reservations.get(medium).map(Vec::as_slice).unwrap_or(&[])
    }

    fn loaned(&self, medium: &Medium) -> bool {
        self.loans.contains_key(medium)
    }

    fn loaned_to(&self, customer: &Customer, medium: &Medium) -> bool {
        self.loans.get(medium).map_or(false, |loan| loan.borrower() == customer)
    }

    fn reserved_by(&self, customer: &Customer, medium: &Medium) -> bool {
        self.queue(medium).iter().any(|reservation| reservation.is_reserved_by(customer))
    }

    // strictly the head of the queue; reservation dates only have day precision and are
    // never compared
    fn first_reserver(&self, customer: &Customer, medium: &Medium) -> bool {
        self.queue(medium).first().map_or(false, |head| head.is_reserved_by(customer))
    }

    // all media free, and for every reserved one the customer heads its queue
    fn lendable(&self, customer: &Customer, media: &[Medium]) -> bool {
        media.iter().all(|medium| !self.loaned(medium)) &&
            media.iter()
                .filter(|medium| !self.queue(medium).is_empty())
                .all(|medium| self.first_reserver(customer, medium))
    }

    fn reservation_refusal(&self, customer: &Customer, medium: &Medium) -> Option<String> {
        if self.reserved_by(customer, medium) {
            Some(format!("customer {} already reserved medium {}", customer.customer_id, medium.medium_id))
        } else if self.queue(medium).len() >= self.max_reservations {
            Some(format!("medium {} already has {} reservations", medium.medium_id, self.max_reservations))
        } else if self.loaned_to(customer, medium) {
            Some(format!("medium {} is loaned to customer {}", medium.medium_id, customer.customer_id))
        } else {
            None
        }
    }

    fn record(&self, event: serde_json::Result<LedgerEvent>) -> LibraryResult<()> {
        let event = event?;
        self.event_recorder.record(&event).map_err(|err| {
            warn!(branch = %self.branch_id, event_id = %event.event_id, kind = ?event.kind,
                medium = %event.key, "ledger event not recorded: {}", err);
            err
        })
    }

    fn take_reservation(&mut self, medium: &Medium, customer: &Customer) -> Option<ReservationRecord> {
        let queue = self.reservations.get_mut(medium)?;
        let ndx = queue.iter().position(|reservation| reservation.is_reserved_by(customer))?;
        debug!(medium = %medium.medium_id, customer = %customer.customer_id, "reservation removed");
        Some(queue.remove(ndx))
    }

    fn remove_reservation(&mut self, medium: &Medium, date: NaiveDate, customer: &Customer) -> LibraryResult<()> {
        let reservation = self.take_reservation(medium, customer).ok_or_else(|| LibraryError::precondition(
            format!("customer {} has no reservation for medium {}",
                    customer.customer_id, medium.medium_id).as_str(), Some("409".to_string())))?;
        self.record(LedgerEvent::reservation_removed(&reservation, date))
    }

    // the loan and the cleared reservation both take effect before either event is recorded
    fn apply_lend(&mut self, customer: &Customer, media: &[Medium], date: NaiveDate) -> LibraryResult<()> {
        for medium in media {
            let loan = LoanRecord::new(customer, medium, date);
            self.loans.insert(medium.clone(), loan.clone());
            let reservation = self.take_reservation(medium, customer);
            debug!(medium = %medium.medium_id, customer = %customer.customer_id, "loan created");
            self.record(LedgerEvent::loan_created(&loan))?;
            if let Some(reservation) = reservation {
                self.record(LedgerEvent::reservation_removed(&reservation, date))?;
            }
        }
        Ok(())
    }

    fn apply_return(&mut self, media: &[Medium], date: NaiveDate) -> LibraryResult<()> {
        for medium in media {
            let loan = self.loans.remove(medium).ok_or_else(|| LibraryError::precondition(
                format!("medium {} is not loaned", medium.medium_id).as_str(), Some("409".to_string())))?;
            debug!(medium = %medium.medium_id, customer = %loan.borrower().customer_id, "loan returned");
            self.record(LedgerEvent::loan_returned(&loan, date))?;
        }
        Ok(())
    }

    fn apply_reserve(&mut self, customer: &Customer, media: &[Medium], date: NaiveDate) -> LibraryResult<()> {
        for medium in media {
            let reservation = ReservationRecord::new(customer, medium, date);
            self.reservations.entry(medium.clone()).or_default().push(reservation.clone());
            debug!(medium = %medium.medium_id, customer = %customer.customer_id, "reservation created");
            self.record(LedgerEvent::reservation_created(&reservation))?;
        }
        Ok(())
    }

    fn apply_cancel(&mut self, media: &[Medium], date: NaiveDate, customer: &Customer) -> LibraryResult<()> {
        for medium in media {
            self.remove_reservation(medium, date, customer)?;
        }
        Ok(())
    }

    // Batches are not rolled back when recording fails part way: the items applied so far
    // stay in effect, observers still hear about them and the error goes to the caller.
    fn finish_batch(&self, operation: &str, res: LibraryResult<()>) -> LibraryResult<()> {
        self.notifier.notify_all();
        if let Err(ref err) = res {
            warn!(branch = %self.branch_id, operation, "batch stopped after partial application: {}", err);
        }
        res
    }
}

impl LendingLedger for LendingLedgerImpl {
    fn lend_to(&mut self, customer: &Customer, media: &[Medium], date: NaiveDate) -> LibraryResult<()> {
        self.ensure_customer(customer)?;
        self.ensure_media(media)?;
        Self::ensure_distinct(media)?;
        if let Some(loaned) = media.iter().find(|medium| self.loaned(medium)) {
            return Err(LibraryError::precondition(format!("medium {} is already loaned",
                                                          loaned.medium_id).as_str(), Some("409".to_string())));
        }
        if !self.lendable(customer, media) {
            return Err(LibraryError::precondition(format!("customer {} is not first reserver of all reserved media",
                                                          customer.customer_id).as_str(), Some("409".to_string())));
        }
        info!(branch = %self.branch_id, customer = %customer.customer_id, media = media.len(), %date, "lending media");
        let res = self.apply_lend(customer, media, date);
        self.finish_batch("lend", res)
    }

    fn return_media(&mut self, media: &[Medium], date: NaiveDate) -> LibraryResult<()> {
        self.ensure_media(media)?;
        Self::ensure_distinct(media)?;
        if let Some(free) = media.iter().find(|medium| !self.loaned(medium)) {
            return Err(LibraryError::precondition(format!("medium {} is not loaned",
                                                          free.medium_id).as_str(), Some("409".to_string())));
        }
        info!(branch = %self.branch_id, media = media.len(), %date, "returning media");
        let res = self.apply_return(media, date);
        self.finish_batch("return", res)
    }

    fn is_lendable(&self, customer: &Customer, media: &[Medium]) -> LibraryResult<bool> {
        self.ensure_customer(customer)?;
        self.ensure_media(media)?;
        Ok(self.lendable(customer, media))
    }

    fn borrower_of(&self, medium: &Medium) -> LibraryResult<Customer> {
        self.loan_of(medium).map(|loan| loan.borrower().clone())
    }

    fn loaned_media_of(&self, customer: &Customer) -> LibraryResult<Vec<Medium>> {
        self.loans_of(customer).map(|loans| loans.iter().map(|loan| loan.medium().clone()).collect())
    }

    fn loans(&self) -> Vec<LoanRecord> {
        self.loans.values().cloned().collect()
    }

    fn loans_of(&self, customer: &Customer) -> LibraryResult<Vec<LoanRecord>> {
        self.ensure_customer(customer)?;
        Ok(self.loans.values()
            .filter(|loan| loan.borrower() == customer)
            .cloned()
            .collect())
    }

    fn loan_of(&self, medium: &Medium) -> LibraryResult<LoanRecord> {
        self.ensure_medium(medium)?;
        self.loans.get(medium).cloned().ok_or_else(|| LibraryError::precondition(
            format!("medium {} is not loaned", medium.medium_id).as_str(), Some("409".to_string())))
    }

    fn is_loaned(&self, medium: &Medium) -> LibraryResult<bool> {
        self.ensure_medium(medium)?;
        Ok(self.loaned(medium))
    }

    fn are_all_loaned(&self, media: &[Medium]) -> LibraryResult<bool> {
        self.ensure_media(media)?;
        Ok(media.iter().all(|medium| self.loaned(medium)))
    }

    fn are_none_loaned(&self, media: &[Medium]) -> LibraryResult<bool> {
        self.ensure_media(media)?;
        Ok(media.iter().all(|medium| !self.loaned(medium)))
    }

    fn is_loaned_to(&self, customer: &Customer, medium: &Medium) -> LibraryResult<bool> {
        self.ensure_customer(customer)?;
        self.ensure_medium(medium)?;
        Ok(self.loaned_to(customer, medium))
    }

    fn are_all_loaned_to(&self, customer: &Customer, media: &[Medium]) -> LibraryResult<bool> {
        self.ensure_customer(customer)?;
        self.ensure_media(media)?;
        Ok(media.iter().all(|medium| self.loaned_to(customer, medium)))
    }

    fn reserve(&mut self, customer: &Customer, media: &[Medium], date: NaiveDate) -> LibraryResult<()> {
        self.ensure_customer(customer)?;
        self.ensure_media(media)?;
        Self::ensure_distinct(media)?;
        if let Some(reason) = media.iter().find_map(|medium| self.reservation_refusal(customer, medium)) {
            return Err(LibraryError::precondition(reason.as_str(), Some("409".to_string())));
        }
        info!(branch = %self.branch_id, customer = %customer.customer_id, media = media.len(), %date, "reserving media");
        let res = self.apply_reserve(customer, media, date);
        self.finish_batch("reserve", res)
    }

    fn is_reservable(&self, customer: &Customer, media: &[Medium]) -> LibraryResult<bool> {
        self.ensure_customer(customer)?;
        self.ensure_media(media)?;
        Ok(media.iter().all(|medium| self.reservation_refusal(customer, medium).is_none()))
    }

    fn cancel_reservation(&mut self, medium: &Medium, date: NaiveDate, customer: &Customer) -> LibraryResult<()> {
        self.cancel_reservations(std::slice::from_ref(medium), date, customer)
    }

    fn cancel_reservations(&mut self, media: &[Medium], date: NaiveDate, customer: &Customer) -> LibraryResult<()> {
        self.ensure_customer(customer)?;
        self.ensure_media(media)?;
        Self::ensure_distinct(media)?;
        if let Some(missing) = media.iter().find(|medium| !self.reserved_by(customer, medium)) {
            return Err(LibraryError::precondition(format!("customer {} has no reservation for medium {}",
                                                          customer.customer_id, missing.medium_id).as_str(), Some("409".to_string())));
        }
        info!(branch = %self.branch_id, customer = %customer.customer_id, media = media.len(), %date, "cancelling reservations");
        let res = self.apply_cancel(media, date, customer);
        self.finish_batch("cancel", res)
    }

    fn reservations_of(&self, medium: &Medium) -> LibraryResult<Vec<ReservationRecord>> {
        self.ensure_medium(medium)?;
        Ok(self.queue(medium).to_vec())
    }

    fn reservers_of(&self, medium: &Medium) -> LibraryResult<Vec<Customer>> {
        self.ensure_medium(medium)?;
        Ok(self.queue(medium).iter().map(|reservation| reservation.reserver().clone()).collect())
    }

    fn reserved_media_of(&self, customer: &Customer) -> LibraryResult<Vec<Medium>> {
        self.ensure_customer(customer)?;
        Ok(self.reservations.values()
            .flatten()
            .filter(|reservation| reservation.is_reserved_by(customer))
            .map(|reservation| reservation.medium().clone())
            .collect())
    }

    fn all_reservations(&self) -> Vec<ReservationRecord> {
        self.reservations.values().flatten().cloned().collect()
    }

    fn reservation_of(&self, customer: &Customer, medium: &Medium) -> LibraryResult<ReservationRecord> {
        self.ensure_customer(customer)?;
        self.ensure_medium(medium)?;
        self.queue(medium).iter()
            .find(|reservation| reservation.is_reserved_by(customer))
            .cloned()
            .ok_or_else(|| LibraryError::precondition(format!("customer {} has no reservation for medium {}",
                                                              customer.customer_id, medium.medium_id).as_str(), Some("409".to_string())))
    }

    fn first_reserver_of(&self, medium: &Medium) -> LibraryResult<Customer> {
        self.ensure_medium(medium)?;
        self.queue(medium).first()
            .map(|head| head.reserver().clone())
            .ok_or_else(|| LibraryError::precondition(format!("medium {} is not reserved",
                                                              medium.medium_id).as_str(), Some("409".to_string())))
    }

    fn is_reserved(&self, medium: &Medium) -> LibraryResult<bool> {
        self.ensure_medium(medium)?;
        Ok(!self.queue(medium).is_empty())
    }

    fn are_all_reserved(&self, media: &[Medium]) -> LibraryResult<bool> {
        self.ensure_media(media)?;
        Ok(media.iter().all(|medium| !self.queue(medium).is_empty()))
    }

    fn are_none_reserved(&self, media: &[Medium]) -> LibraryResult<bool> {
        self.ensure_media(media)?;
        Ok(media.iter().all(|medium| self.queue(medium).is_empty()))
    }

    fn is_reserved_by(&self, customer: &Customer, medium: &Medium) -> LibraryResult<bool> {
        self.ensure_customer(customer)?;
        self.ensure_medium(medium)?;
        Ok(self.reserved_by(customer, medium))
    }

    fn are_all_reserved_by(&self, customer: &Customer, media: &[Medium]) -> LibraryResult<bool> {
        self.ensure_customer(customer)?;
        self.ensure_media(media)?;
        Ok(media.iter().all(|medium| self.reserved_by(customer, medium)))
    }

    fn is_first_reserver(&self, customer: &Customer, medium: &Medium) -> LibraryResult<bool> {
        self.ensure_customer(customer)?;
        self.ensure_medium(medium)?;
        Ok(self.first_reserver(customer, medium))
    }

    fn is_first_reserver_for_all(&self, customer: &Customer, media: &[Medium]) -> LibraryResult<bool> {
        self.ensure_customer(customer)?;
        self.ensure_media(media)?;
        Ok(media.iter().all(|medium| self.first_reserver(customer, medium)))
    }

    fn contains_customer(&self, customer: &Customer) -> bool {
        self.customer_registry.contains_customer(customer)
    }

    fn contains_medium(&self, medium: &Medium) -> bool {
        self.catalog.contains_medium(medium)
    }

    fn contains_media(&self, media: &[Medium]) -> bool {
        !media.is_empty() && media.iter().all(|medium| self.catalog.contains_medium(medium))
    }

    fn status_of(&self, medium: &Medium) -> LibraryResult<MediumStatus> {
        self.ensure_medium(medium)?;
        if self.loaned(medium) {
            Ok(MediumStatus::Loaned)
        } else if !self.queue(medium).is_empty() {
            Ok(MediumStatus::Reserved)
        } else {
            Ok(MediumStatus::Available)
        }
    }

    fn register_observer(&mut self, observer: Box<dyn ChangeObserver>) -> ObserverHandle {
        self.notifier.register(observer)
    }

    fn unregister_observer(&mut self, handle: ObserverHandle) -> bool {
        self.notifier.unregister(handle)
    }
}
