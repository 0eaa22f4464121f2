//! Read-only aggregations behind the `/public` routes.
//!
//! Everything here composes the other services; independent reads are
//! issued concurrently with `tokio::try_join!`.

use crate::{
    error::AppResult,
    models::{
        Stored,
        about::About,
        contact::ContactInfo,
        course::{CategoryRef, Course, CourseCategory},
        event::Event,
        faculty::Faculty,
        faq::{FaqCategory, FaqView},
        gallery::{GalleryCategory, GalleryView},
        public::{PublicCourse, PublicFooter, PublicHome},
    },
    repository::{Collection, Direction, Query, RepositoryState},
};

use super::{
    Records, about::AboutService, contact::ContactService, course::CourseService,
    event::{EventService, upcoming_query}, faculty::FacultyService, faq::FaqService,
    footer::FooterService, gallery::GalleryService, homepage::HomepageService, index_by_id,
};

pub const LATEST_COURSES: i64 = 4;
pub const UPCOMING_EVENTS: i64 = 4;
pub const GALLERY_IMAGES: i64 = 6;

/// Display icons for the public course cards, assigned by position.
pub const COURSE_ICONS: &[&str] = &["🎓", "🌍", "💼", "🖥️", "📚", "🔬", "🎨", "📊", "🌟", "🚀"];

pub struct PublicService {
    courses: Records<Course>,
    course_categories: Records<CourseCategory>,
    events: Records<Event>,
    about: AboutService,
    contact: ContactService,
    course: CourseService,
    event: EventService,
    faculty: FacultyService,
    faq: FaqService,
    footer: FooterService,
    gallery: GalleryService,
    homepage: HomepageService,
}

impl PublicService {
    pub fn new(repo: RepositoryState) -> Self {
        Self {
            courses: Records::new(repo.clone(), Collection::Courses, "Course"),
            course_categories: Records::new(
                repo.clone(),
                Collection::CourseCategories,
                "Course category",
            ),
            events: Records::new(repo.clone(), Collection::Events, "Event"),
            about: AboutService::new(repo.clone()),
            contact: ContactService::new(repo.clone()),
            course: CourseService::new(repo.clone()),
            event: EventService::new(repo.clone()),
            faculty: FacultyService::new(repo.clone()),
            faq: FaqService::new(repo.clone()),
            footer: FooterService::new(repo.clone()),
            gallery: GalleryService::new(repo.clone()),
            homepage: HomepageService::new(repo),
        }
    }

    /// home
    ///
    /// Landing page payload: hero, reasons, the newest courses, the soonest
    /// upcoming events and the newest gallery images.
    pub async fn home(&self) -> AppResult<PublicHome> {
        let latest_courses = Query::new()
            .eq("isActive", true)
            .sort_by_created(Direction::Desc)
            .limit(LATEST_COURSES);
        let upcoming_events = upcoming_query()
            .sort_by("date", Direction::Asc)
            .limit(UPCOMING_EVENTS);

        let (hero_section, why_choose_us, latest_courses, upcoming_events, gallery_images) =
            tokio::try_join!(
                self.homepage.hero(),
                self.homepage.reasons(),
                self.courses.list(&latest_courses),
                self.events.list(&upcoming_events),
                self.gallery.latest(GALLERY_IMAGES),
            )?;

        Ok(PublicHome {
            hero_section,
            why_choose_us,
            latest_courses,
            upcoming_events,
            gallery_images,
        })
    }

    /// Active courses with their category resolved and an icon attached.
    pub async fn home_courses(&self) -> AppResult<Vec<Stored<PublicCourse>>> {
        let active = Query::new()
            .eq("isActive", true)
            .sort_by("order", Direction::Asc)
            .sort_by_created(Direction::Desc);
        let all_categories = Query::new();
        let (courses, categories) = tokio::try_join!(
            self.courses.list(&active),
            self.course_categories.list(&all_categories),
        )?;
        let by_id = index_by_id(&categories);

        Ok(courses
            .into_iter()
            .enumerate()
            .map(|(i, course)| {
                let category = by_id.get(&course.data.category).map(|c| CategoryRef::from(*c));
                let icon = COURSE_ICONS[i % COURSE_ICONS.len()];
                course.map(|data| PublicCourse::new(data, category, icon))
            })
            .collect())
    }

    pub async fn faculty(&self, leadership: bool) -> AppResult<Vec<Stored<Faculty>>> {
        self.faculty.by_leadership(leadership).await
    }

    pub async fn gallery(&self) -> AppResult<Vec<Stored<GalleryView>>> {
        self.gallery.list().await
    }

    pub async fn gallery_categories(&self) -> AppResult<Vec<Stored<GalleryCategory>>> {
        self.gallery.categories().await
    }

    pub async fn events(&self) -> AppResult<Vec<Stored<Event>>> {
        self.event.list().await
    }

    pub async fn faq(&self) -> AppResult<Vec<Stored<FaqView>>> {
        self.faq.list().await
    }

    pub async fn faq_categories(&self) -> AppResult<Vec<Stored<FaqCategory>>> {
        self.faq.categories().await
    }

    pub async fn contact(&self) -> AppResult<Vec<Stored<ContactInfo>>> {
        self.contact.list_info().await
    }

    pub async fn footer(&self) -> AppResult<PublicFooter> {
        let (footer, contact) = tokio::try_join!(self.footer.list(), self.contact.list_info())?;
        Ok(PublicFooter { footer, contact })
    }

    pub async fn about(&self) -> AppResult<Vec<Stored<About>>> {
        self.about.list().await
    }

    pub async fn course_categories(&self) -> AppResult<Vec<Stored<CourseCategory>>> {
        self.course.categories().await
    }
}
