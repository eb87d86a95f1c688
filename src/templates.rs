use maud::{DOCTYPE, Markup, html};

use crate::models::{CategoryRow, DirectorRow, MovieRecord};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";
const INPUT: &str = "mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500";

pub fn index_page(movies: &[MovieRecord]) -> String {
    page(
        "Movie Catalog",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-4xl mx-auto px-6 py-12" {
                    div class="flex items-start justify-between gap-6" {
                        div {
                            h1 class="text-3xl font-bold text-gray-900" { "Movie Catalog" }
                            p class="mt-2 text-gray-600" { "Every movie, its director and its category." }
                        }
                        a class="rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" href="/form" { "Add movie" }
                    }

                    @if movies.is_empty() {
                        div class="mt-10 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "No movies yet. Add the first one." }
                        }
                    } @else {
                        div class="mt-10 space-y-4" {
                            @for movie in movies {
                                (movie_card(movie))
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn form_page(
    heading: &str,
    submit: &str,
    movie: Option<&MovieRecord>,
    categories: &[CategoryRow],
    directors: &[DirectorRow],
) -> String {
    let action = match movie {
        Some(m) => format!("/update/{}", m.id),
        None => "/movies".to_string(),
    };

    page(
        heading,
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-3xl font-bold text-gray-900" { (heading) }

                        form class="mt-8 space-y-6" method="post" action=(action) {
                            div {
                                label class="block text-sm font-medium text-gray-700" for="title" { "Title" }
                                input class=(INPUT) name="title" id="title" value=[movie.map(|m| m.title.as_str())] required;
                            }

                            div {
                                label class="block text-sm font-medium text-gray-700" for="director" { "Director" }
                                input class=(INPUT) name="director" id="director" list="directors" value=[movie.map(|m| m.director.as_str())] required;
                                datalist id="directors" {
                                    @for director in directors {
                                        option value=(director.director) {}
                                    }
                                }
                            }

                            div {
                                label class="block text-sm font-medium text-gray-700" for="categoryId" { "Category" }
                                select class=(INPUT) name="categoryId" id="categoryId" required {
                                    option value="" { "Select a category" }
                                    @for category in categories {
                                        option value=(category.id) selected[movie.map(|m| m.category_id) == Some(category.id)] {
                                            (category.category)
                                        }
                                    }
                                }
                            }

                            div class="grid gap-6 md:grid-cols-2" {
                                div {
                                    label class="block text-sm font-medium text-gray-700" for="year" { "Year" }
                                    input class=(INPUT) name="year" id="year" type="number" value=[movie.and_then(|m| m.year)];
                                }
                                div {
                                    label class="block text-sm font-medium text-gray-700" for="rating" { "Rating" }
                                    input class=(INPUT) name="rating" id="rating" type="number" step="0.1" min="0" max="10" value=[movie.and_then(|m| m.rating)];
                                }
                            }

                            div {
                                label class="block text-sm font-medium text-gray-700" for="image" { "Image URL" }
                                input class=(INPUT) name="image" id="image" value=[movie.and_then(|m| m.image.as_deref())];
                            }

                            div {
                                label class="block text-sm font-medium text-gray-700" for="review" { "Review" }
                                textarea class=(INPUT) name="review" id="review" rows="4" {
                                    @if let Some(review) = movie.and_then(|m| m.review.as_deref()) { (review) }
                                }
                            }

                            div class="flex items-center gap-4" {
                                button class="rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { (submit) }
                                a class="text-sm text-blue-600 hover:text-blue-800" href="/" { "Cancel" }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn error_page(message: String) -> String {
    page(
        "Error",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Error" }
                        p class="mt-4 text-gray-700" { (message) }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body { (body) }
        }
    }
    .into_string()
}

fn movie_card(movie: &MovieRecord) -> Markup {
    html! {
        div class="bg-white shadow rounded-lg p-6" {
            div class="flex items-start justify-between gap-4" {
                div class="flex items-start gap-4" {
                    @if let Some(image) = &movie.image {
                        img class="h-24 w-16 rounded object-cover" src=(image) alt=(movie.title);
                    }
                    div {
                        h2 class="text-xl font-semibold text-gray-900" {
                            (movie.title)
                            @if let Some(year) = movie.year {
                                span class="ml-2 font-normal text-gray-500" { "(" (year) ")" }
                            }
                        }
                        p class="mt-1 text-sm text-gray-600" { (movie.director) " · " (movie.category) }
                        @if let Some(rating) = movie.rating {
                            p class="mt-1 text-sm text-gray-500" { "Rating: " (rating) "/10" }
                        }
                        @if let Some(review) = &movie.review {
                            p class="mt-2 text-sm text-gray-700" { (review) }
                        }
                    }
                }
                div class="flex shrink-0 gap-3" {
                    a class="text-sm text-blue-600 hover:text-blue-800" href=(format!("/form/{}", movie.id)) { "Edit" }
                    a class="text-sm text-red-600 hover:text-red-800" href=(format!("/delete/{}", movie.id)) { "Delete" }
                }
            }
        }
    }
}
