use portfolio_core_contact_impl::ContactFeatureServiceImpl;
use portfolio_core_health_impl::HealthFeatureServiceImpl;
use portfolio_core_resume_impl::ResumeFeatureServiceImpl;
use portfolio_persistence_memory::MemoryContactMessageRepository;
use portfolio_shared_impl::{id::IdServiceImpl, time::TimeServiceImpl};

// API
pub type RestServer = portfolio_api_rest::RestServer<HealthFeature, ContactFeature, ResumeFeature>;

// Persistence
pub type ContactRepo = MemoryContactMessageRepository<Id, Time>;

// Shared
pub type Id = IdServiceImpl;
pub type Time = TimeServiceImpl;

// Core
pub type ContactFeature = ContactFeatureServiceImpl<ContactRepo>;
pub type HealthFeature = HealthFeatureServiceImpl<Time, ContactRepo, ResumeFeature>;
pub type ResumeFeature = ResumeFeatureServiceImpl;
