use crate::models::{Canteen, Category, FoodItem};

const CANTEEN_IMAGE: &str = "/placeholder.svg?height=200&width=300";
const ITEM_IMAGE: &str = "/placeholder.svg?height=150&width=150";

#[derive(Debug, Clone, Default)]
pub struct MenuFilter {
    pub category: Option<Category>,
    pub query: Option<String>,
}

/// Read-only canteen and food item tables.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    canteens: Vec<Canteen>,
    items: Vec<FoodItem>,
}

impl Catalog {
    pub fn new(canteens: Vec<Canteen>, items: Vec<FoodItem>) -> Self {
        Self { canteens, items }
    }

    pub fn canteens(&self) -> &[Canteen] {
        &self.canteens
    }

    pub fn canteen(&self, id: &str) -> Option<&Canteen> {
        self.canteens.iter().find(|canteen| canteen.id == id)
    }

    pub fn item(&self, id: &str) -> Option<&FoodItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn menu(&self, canteen_id: &str, filter: &MenuFilter) -> Vec<&FoodItem> {
        let query = filter
            .query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);

        self.items
            .iter()
            .filter(|item| item.canteen_id == canteen_id)
            .filter(|item| filter.category.is_none_or(|category| item.category == category))
            .filter(|item| match &query {
                Some(q) => {
                    item.name.to_lowercase().contains(q)
                        || item.description.to_lowercase().contains(q)
                }
                None => true,
            })
            .collect()
    }

    /// Search across every canteen. An empty query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&FoodItem> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.items
            .iter()
            .filter(|item| {
                item.name.to_lowercase().contains(&query)
                    || item.description.to_lowercase().contains(&query)
                    || item.canteen_name.to_lowercase().contains(&query)
            })
            .collect()
    }

    pub fn builtin() -> Self {
        use Category::*;

        let canteen = |id: &str,
                       name: &str,
                       description: &str,
                       rating: f32,
                       location: &str,
                       opening_hours: &str,
                       is_open: bool,
                       categories: &[Category]| Canteen {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            image: CANTEEN_IMAGE.to_string(),
            rating,
            location: location.to_string(),
            opening_hours: opening_hours.to_string(),
            is_open,
            categories: categories.to_vec(),
        };

        #[rustfmt::skip]
        let canteens = vec![
            canteen("1", "KL Adda", "Main canteen serving fresh and healthy meals daily", 4.5,
                "Main Building, Ground Floor", "8:00 AM - 8:00 PM", true,
                &[Breakfast, Lunch, Dinner, Snacks, Beverages]),
            canteen("2", "KL Main Canteen", "Main canteen with a variety of food options", 4.2,
                "Main Building, First Floor", "9:00 AM - 6:00 PM", true, &[Snacks, Beverages, Others]),
            canteen("3", "C Second Floor Canteen", "Vegetarian and vegan options", 4.7,
                "C Block, Second Floor", "8:30 AM - 7:30 PM", false, &[Snacks, Beverages, Others]),
            canteen("4", "C 4th Floor Canteen", "Authentic international cuisine", 4.3,
                "C Block, Fourth Floor", "10:00 AM - 9:00 PM", true, &[Snacks, Beverages, Others]),
            canteen("5", "C 5th Floor Canteen", "A blend of cuisines from around the world", 4.6,
                "C Block, Fifth Floor", "9:00 AM - 10:00 PM", true, &[Snacks, Beverages, Others]),
            canteen("6", "Satish Canteen", "Fast food for students on the go", 4.1,
                "Satish Building, Ground Floor", "7:30 AM - 8:00 PM", true, &[Snacks, Beverages, Others]),
            canteen("7", "RND 1st Floor Canteen", "Research and Development block canteen", 4.4,
                "RND Block, First Floor", "8:00 AM - 7:00 PM", true, &[Snacks, Beverages, Others]),
        ];

        let item = |id: &str,
                    name: &str,
                    description: &str,
                    price: i64,
                    canteen_id: &str,
                    rating: f32,
                    category: Category| FoodItem {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            price,
            image: ITEM_IMAGE.to_string(),
            canteen_id: canteen_id.to_string(),
            canteen_name: canteens
                .iter()
                .find(|canteen| canteen.id == canteen_id)
                .map(|canteen| canteen.name.clone())
                .unwrap_or_default(),
            rating,
            category,
        };

        let (adda, main, second, fourth) = ("1", "2", "3", "4");

        #[rustfmt::skip]
        let items = vec![
            item("101", "Chicken Biryani", "Fragrant basmati rice cooked with tender chicken and aromatic spices", 199, adda, 4.8, Lunch),
            item("102", "Masala Dosa", "Crispy rice crepe filled with spiced potato filling, served with chutney and sambar", 149, adda, 4.5, Breakfast),
            item("103", "Paneer Butter Masala", "Cottage cheese cubes in a rich, creamy tomato gravy", 179, adda, 4.6, Lunch),
            item("104", "Masala Chai", "Traditional Indian spiced tea with milk", 49, adda, 4.7, Beverages),
            item("105", "Samosa", "Crispy pastry filled with spiced potatoes and peas", 39, adda, 4.5, Snacks),
            item("106", "Gulab Jamun", "Deep-fried milk solids soaked in sugar syrup", 59, adda, 4.9, Snacks),
            item("201", "Veg Pulao", "Fragrant rice cooked with mixed vegetables and mild spices", 159, main, 4.4, Lunch),
            item("202", "Chicken Curry", "Tender chicken pieces cooked in a flavorful curry sauce", 189, main, 4.3, Lunch),
            item("203", "Idli Sambar", "Steamed rice cakes served with lentil soup and coconut chutney", 99, main, 4.5, Breakfast),
            item("301", "Veg Thali", "Complete meal with rice, roti, dal, sabzi, raita, and dessert", 249, second, 4.6, Lunch),
            item("302", "Pav Bhaji", "Spiced vegetable mash served with buttered bread rolls", 129, second, 4.5, Snacks),
            item("303", "Lassi", "Sweet or salted yogurt-based drink", 69, second, 4.7, Beverages),
            item("401", "Hyderabadi Biryani", "Authentic Hyderabadi style biryani with tender meat and aromatic spices", 249, fourth, 4.9, Lunch),
            item("402", "Andhra Meals", "Spicy Andhra style complete meal with rice, pappu, vegetables, and pickle", 199, fourth, 4.8, Lunch),
            item("403", "Pesarattu", "Green gram dosa served with ginger chutney", 119, fourth, 4.7, Breakfast),
        ];

        Self::new(canteens, items)
    }
}
