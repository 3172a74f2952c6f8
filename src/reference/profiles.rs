use super::{
    CostProfile, CountryProfile, DailyRange, EtiquetteProfile, Mistake, SafetyProfile,
    TransportProfile, TravelerFit,
};

pub(super) static ALL: &[CountryProfile] = &[
    CountryProfile {
        code: "JP",
        name: "Japan",
        theme: "japan",
        best_time: "March-May for cherry blossoms, October-November for autumn colors",
        visa_info: "Visa-free entry for up to 90 days for most Western passports",
        cost: CostProfile {
            budget: DailyRange { min: 50, max: 80 },
            mid_range: DailyRange { min: 150, max: 250 },
            luxury: DailyRange { min: 400, max: 800 },
            accommodation: [
                "$25-50 (hostels, capsule hotels)",
                "$100-200 (business hotels, ryokans)",
                "$300-600+ (luxury ryokans, 5-star hotels)",
            ],
            food: [
                "$15-25 (convenience stores, ramen)",
                "$40-70 (mid-range restaurants)",
                "$100-200+ (kaiseki, high-end sushi)",
            ],
            transport: [
                "$5-15 (JR Pass amortized)",
                "$20-40 (JR Pass, some taxis)",
                "$50-100+ (green car, private)",
            ],
            activities: [
                "$5-15 (free temples)",
                "$30-50 (attractions, tours)",
                "$100-200+ (private tours)",
            ],
            tips: &[
                "7-day JR Pass pays off for 3+ cities",
                "Convenience store food is excellent and cheap",
                "Lunch sets are far cheaper than dinner",
                "Many temples and parks are free",
            ],
            tipping: "Never tip in Japan. Good service is expected.",
        },
        culture: EtiquetteProfile {
            summary: "Japanese culture values harmony, respect and attention to detail. Locals are forgiving of visitors' mistakes.",
            etiquette: &[
                "Bow when greeting",
                "Remove shoes when entering homes",
                "Be quiet on public transport",
                "Don't eat while walking",
            ],
            dress: "Smart casual appreciated. Cover shoulders and knees at temples.",
            greetings: "\"Konnichiwa\" (hello), \"Arigatou gozaimasu\" (thank you), \"Sumimasen\" (excuse me)",
            taboos: &[
                "Chopsticks upright in rice",
                "Blowing nose in public",
                "Talking loudly on trains",
                "Cutting in line",
            ],
            customs: &[
                "Onsen etiquette is strict",
                "Business cards are exchanged with two hands",
                "Punctuality is valued",
            ],
        },
        safety: SafetyProfile {
            rating: "very-safe",
            summary: "Japan is consistently ranked among the world's safest countries. Crime is rare and lost items are often returned.",
            concerns: &["Earthquakes (follow local guidance)", "Summer heat", "Crowded trains at rush hour"],
            tips: &["Register for earthquake alerts", "Carry cash safely", "Follow local rules"],
            police: "110",
            ambulance: "119",
            tourist: "050-3816-2787 (Japan Visitor Hotline)",
            health: &["Tap water is safe", "No required vaccinations", "High healthcare standards"],
        },
        transport: TransportProfile {
            public_transport: "World-class metro and train systems. Get a Suica or Pasmo IC card.",
            taxis: "Clean but expensive ($30+ for short trips)",
            rentals: "Only useful in rural areas. International Driving Permit required.",
            walking: "Cities are very walkable and safe",
            intercity: &["Shinkansen (bullet trains)", "Highway buses", "Domestic flights"],
            recommendation: "A JR Pass covers most multi-city itineraries. Tokyo-Kyoto is 2.5 hours by Shinkansen.",
        },
        mistakes: &[
            Mistake {
                mistake: "Not carrying enough cash",
                why: "Many small places don't accept cards",
                instead: "Withdraw at 7-Eleven ATMs",
            },
            Mistake {
                mistake: "Trying to see everything",
                why: "Japan is dense with experiences",
                instead: "Focus on fewer places with more time",
            },
            Mistake {
                mistake: "Ignoring the JR Pass",
                why: "Intercity travel is expensive",
                instead: "Calculate routes; it often saves 50% or more",
            },
            Mistake {
                mistake: "Expecting everyone to speak English",
                why: "English levels vary outside big cities",
                instead: "Learn basic phrases and use translation apps",
            },
        ],
        best_for: &[
            TravelerFit {
                kind: "First-time Asia travelers",
                why: "Extremely safe, clean and easy to navigate",
                highlights: &["Reliable transport", "Clear signage", "Helpful locals"],
            },
            TravelerFit {
                kind: "Food enthusiasts",
                why: "More Michelin stars than any other country",
                highlights: &["World-class sushi", "Regional specialties", "Convenience store cuisine"],
            },
            TravelerFit {
                kind: "Culture seekers",
                why: "Living traditions alongside modernity",
                highlights: &["Ancient temples", "Tea ceremonies", "Traditional crafts"],
            },
            TravelerFit {
                kind: "Solo travelers",
                why: "Safe at night and solo dining is normal",
                highlights: &["Solo-friendly restaurants", "Great transit"],
            },
        ],
    },
    CountryProfile {
        code: "MA",
        name: "Morocco",
        theme: "morocco",
        best_time: "March to May and September to November",
        visa_info: "Visa-free for 90 days for US, EU, UK, Canadian and Australian citizens",
        cost: CostProfile {
            budget: DailyRange { min: 35, max: 55 },
            mid_range: DailyRange { min: 80, max: 150 },
            luxury: DailyRange { min: 250, max: 500 },
            accommodation: [
                "$15-30 (hostels, basic riads)",
                "$50-120 (beautiful riads, 3-4 star hotels)",
                "$150-400+ (luxury riads, 5-star resorts)",
            ],
            food: [
                "$8-15 (street food, local restaurants)",
                "$20-40 (mid-range restaurants, riad dining)",
                "$60-100+ (fine dining, hotel restaurants)",
            ],
            transport: [
                "$5-10 (buses, shared taxis)",
                "$15-30 (private taxis, some trains)",
                "$50-100+ (private drivers, domestic flights)",
            ],
            activities: [
                "$5-15 (free attractions, walking tours)",
                "$30-60 (guided tours, hammams)",
                "$100-250+ (private tours, desert camps)",
            ],
            tips: &[
                "Haggling is expected in souks; start at 30-40% of the asking price",
                "Riads offer great value compared to Western hotels",
                "CTM buses are cheap, reliable and air-conditioned",
            ],
            tipping: "Expected for good service. 10-15% at restaurants, 20-50 MAD for guides.",
        },
        culture: EtiquetteProfile {
            summary: "Morocco is a Muslim country with deep traditions of hospitality. Respect Islamic customs and dress modestly.",
            etiquette: &[
                "Dress modestly and cover shoulders and knees",
                "Use your right hand for eating and greetings",
                "Ask before photographing people",
                "Accept mint tea when offered",
            ],
            dress: "Cover shoulders and knees, especially in medinas. Swimwear only at beaches and pools.",
            greetings: "\"Salaam alaikum\" (peace be upon you), \"Shukran\" (thank you)",
            taboos: &[
                "Public displays of affection",
                "Alcohol outside licensed venues",
                "Criticizing the king or Islam",
            ],
            customs: &[
                "Ramadan affects opening hours",
                "Friday is the holy day",
                "Hammam bathhouses are an important tradition",
                "Bargaining is expected in souks",
            ],
        },
        safety: SafetyProfile {
            rating: "safe",
            summary: "Morocco is generally safe for tourists. Violent crime is rare; touts, scams and petty theft are the main concerns.",
            concerns: &[
                "Aggressive touts and unofficial guides in medinas",
                "Scams such as fake directions and overcharging",
                "Pickpocketing in crowds",
            ],
            tips: &[
                "Say \"la shukran\" firmly to decline touts",
                "Agree on taxi prices before getting in",
                "Only use official guides",
            ],
            police: "19",
            ambulance: "15",
            tourist: "+212 524 38 44 17 (Tourist Police Marrakech)",
            health: &[
                "Drink only bottled water",
                "Be cautious with raw vegetables",
                "Sun protection is essential in summer",
            ],
        },
        transport: TransportProfile {
            public_transport: "ONCF trains connect Marrakech, Fes, Casablanca and Tangier. Modern and affordable.",
            taxis: "Petit taxis within cities, grand taxis between cities. Agree on the fare or insist on the meter.",
            rentals: "Useful for the Atlas Mountains. Not recommended for medinas.",
            walking: "Essential in car-free medinas. Wear comfortable shoes.",
            intercity: &["ONCF trains", "CTM buses", "Supratours buses", "Grand taxis"],
            recommendation: "Take the train between Marrakech, Casablanca and Fes. Book a 2-3 day tour for the Sahara.",
        },
        mistakes: &[
            Mistake {
                mistake: "Not bargaining in souks",
                why: "Initial prices are inflated for negotiation",
                instead: "Start at 30-40% of the asking price and be ready to walk away",
            },
            Mistake {
                mistake: "Accepting unsolicited help in medinas",
                why: "Self-appointed guides demand payment",
                instead: "Ask shopkeepers for directions or book an official guide",
            },
            Mistake {
                mistake: "Only visiting Marrakech",
                why: "You miss the diversity Morocco offers",
                instead: "Add Fes, Chefchaouen, the Sahara or Essaouira",
            },
        ],
        best_for: &[
            TravelerFit {
                kind: "Adventure seekers",
                why: "Desert treks and mountain hikes",
                highlights: &["Sahara camps", "Atlas Mountains", "Camel trekking"],
            },
            TravelerFit {
                kind: "Culture enthusiasts",
                why: "Medieval medinas and living crafts",
                highlights: &["Fes el-Bali", "Souks", "Islamic architecture"],
            },
            TravelerFit {
                kind: "Food lovers",
                why: "Tagines, couscous and street food",
                highlights: &["Jemaa el-Fnaa food stalls", "Cooking classes", "Mint tea"],
            },
        ],
    },
    CountryProfile {
        code: "FR",
        name: "France",
        theme: "france",
        best_time: "April-June and September-October",
        visa_info: "Schengen area; most nationalities can visit visa-free for 90 days",
        cost: CostProfile {
            budget: DailyRange { min: 70, max: 110 },
            mid_range: DailyRange { min: 160, max: 280 },
            luxury: DailyRange { min: 450, max: 900 },
            accommodation: [
                "$35-70 (hostels, budget hotels)",
                "$110-220 (boutique hotels)",
                "$350-700+ (palace hotels)",
            ],
            food: [
                "$20-35 (bakeries, markets, prix-fixe lunch)",
                "$50-90 (bistros)",
                "$150-300+ (Michelin dining)",
            ],
            transport: [
                "$5-15 (metro, buses)",
                "$20-50 (regional trains)",
                "$80-150+ (first-class TGV, taxis)",
            ],
            activities: [
                "$10-20 (free museum days, walking)",
                "$30-60 (museums, tours)",
                "$100-250+ (private guides, wine tours)",
            ],
            tips: &[
                "Lunch menus (formule) are much cheaper than dinner",
                "Many national museums are free on the first Sunday of the month",
                "Book TGV tickets early for the best fares",
            ],
            tipping: "Service is included. Round up or leave a few euros for good service.",
        },
        culture: EtiquetteProfile {
            summary: "French culture prizes politeness, food and conversation. A greeting before any request is essential.",
            etiquette: &[
                "Always say \"Bonjour\" when entering a shop",
                "Keep your voice down in restaurants",
                "Keep your hands on the table while dining",
            ],
            dress: "Smart casual. Avoid athletic wear in nicer restaurants.",
            greetings: "\"Bonjour\" (hello), \"Merci\" (thank you), la bise among friends",
            taboos: &["Skipping greetings", "Asking for substitutions in fine dining", "Talking about money"],
            customs: &["Long lunches", "Sunday closures", "Markets on weekend mornings"],
        },
        safety: SafetyProfile {
            rating: "safe",
            summary: "France is safe for visitors. Pickpocketing is common in Paris tourist areas and on the metro.",
            concerns: &["Pickpockets at major sights", "Petition and bracelet scams", "Demonstrations and strikes"],
            tips: &["Keep bags zipped on the metro", "Ignore petition sellers", "Check strike schedules"],
            police: "17",
            ambulance: "15",
            tourist: "112",
            health: &["Tap water is safe", "Pharmacies are well stocked", "EHIC/GHIC valid for Europeans"],
        },
        transport: TransportProfile {
            public_transport: "Excellent metro in Paris and trams in most cities",
            taxis: "Metered taxis and rideshare apps in cities",
            rentals: "Ideal for Provence, Normandy and the Loire Valley",
            walking: "City centers are compact and walkable",
            intercity: &["TGV high-speed trains", "Regional TER trains", "Budget buses"],
            recommendation: "TGV links Paris to Lyon, Marseille and Bordeaux in 2-3 hours.",
        },
        mistakes: &[
            Mistake {
                mistake: "Skipping the greeting",
                why: "It is considered rude",
                instead: "Start every interaction with \"Bonjour\"",
            },
            Mistake {
                mistake: "Only visiting Paris",
                why: "Regions differ greatly in food and landscape",
                instead: "Add Lyon, Provence or the Riviera",
            },
        ],
        best_for: &[
            TravelerFit {
                kind: "Art lovers",
                why: "World-class museums",
                highlights: &["Louvre", "Musée d'Orsay", "Giverny"],
            },
            TravelerFit {
                kind: "Food and wine lovers",
                why: "Legendary cuisine and vineyards",
                highlights: &["Bordeaux", "Burgundy", "Lyon bouchons"],
            },
        ],
    },
    CountryProfile {
        code: "IT",
        name: "Italy",
        theme: "italy",
        best_time: "April-June and September-October",
        visa_info: "Schengen area; most nationalities can visit visa-free for 90 days",
        cost: CostProfile {
            budget: DailyRange { min: 60, max: 100 },
            mid_range: DailyRange { min: 150, max: 250 },
            luxury: DailyRange { min: 400, max: 800 },
            accommodation: [
                "$30-60 (hostels, agriturismi)",
                "$100-200 (3-4 star hotels)",
                "$300-700+ (historic palazzi)",
            ],
            food: [
                "$20-30 (pizza al taglio, markets)",
                "$45-80 (trattorias)",
                "$120-250+ (fine dining)",
            ],
            transport: [
                "$5-15 (city buses, regional trains)",
                "$25-50 (Frecciarossa trains)",
                "$80-150+ (private transfers)",
            ],
            activities: [
                "$10-20 (churches, piazzas)",
                "$30-60 (museums, guided tours)",
                "$120-250+ (private tours)",
            ],
            tips: &[
                "Standing at the bar is cheaper than table service",
                "Book Vatican and Uffizi tickets in advance",
                "Regional trains have fixed, low fares",
            ],
            tipping: "Not expected. Coperto (cover charge) is often added; round up for great service.",
        },
        culture: EtiquetteProfile {
            summary: "Italian life revolves around family, food and la dolce vita. Each region has a distinct identity.",
            etiquette: &[
                "Cover shoulders and knees in churches",
                "Don't order cappuccino after 11am",
                "Validate train tickets before boarding",
            ],
            dress: "Italians dress well. Smart casual is the norm.",
            greetings: "\"Buongiorno\" (good morning), \"Grazie\" (thank you)",
            taboos: &["Sitting on monuments", "Eating near churches", "Asking for parmesan on seafood pasta"],
            customs: &["Afternoon riposo closures", "Evening passeggiata", "Late dinners"],
        },
        safety: SafetyProfile {
            rating: "safe",
            summary: "Italy is safe for travelers. Pickpocketing targets crowded tourist sites and public transport.",
            concerns: &["Pickpockets in Rome and Florence", "Taxi overcharging", "Fake petition scams"],
            tips: &["Use official taxis only", "Keep valuables in front pockets"],
            police: "113",
            ambulance: "118",
            tourist: "112",
            health: &["Tap water is safe", "Pharmacies marked by a green cross"],
        },
        transport: TransportProfile {
            public_transport: "Good metro in Rome and Milan, buses elsewhere",
            taxis: "Official white taxis with meters",
            rentals: "Great for Tuscany and the south; avoid driving in ZTL zones",
            walking: "Historic centers are best explored on foot",
            intercity: &["Frecciarossa high-speed trains", "Italo trains", "Regional trains", "Ferries"],
            recommendation: "High-speed trains link Rome, Florence, Venice and Milan in 1.5-3.5 hours.",
        },
        mistakes: &[
            Mistake {
                mistake: "Driving into ZTL zones",
                why: "Automatic fines arrive months later",
                instead: "Park outside historic centers",
            },
            Mistake {
                mistake: "Eating next to major sights",
                why: "Tourist-trap prices and quality",
                instead: "Walk a few streets away",
            },
        ],
        best_for: &[
            TravelerFit {
                kind: "History buffs",
                why: "Ancient Rome and the Renaissance",
                highlights: &["Colosseum", "Pompeii", "Florence"],
            },
            TravelerFit {
                kind: "Food lovers",
                why: "Regional cuisine everywhere",
                highlights: &["Bologna", "Naples pizza", "Tuscan wine"],
            },
        ],
    },
    CountryProfile {
        code: "TH",
        name: "Thailand",
        theme: "thailand",
        best_time: "November-February for cool, dry weather",
        visa_info: "Most nationalities get 30-60 days visa-free on arrival",
        cost: CostProfile {
            budget: DailyRange { min: 25, max: 45 },
            mid_range: DailyRange { min: 70, max: 130 },
            luxury: DailyRange { min: 250, max: 500 },
            accommodation: [
                "$8-20 (hostels, guesthouses)",
                "$40-90 (boutique hotels)",
                "$150-400+ (beach resorts)",
            ],
            food: [
                "$5-10 (street food)",
                "$15-30 (restaurants)",
                "$60-120+ (fine dining)",
            ],
            transport: [
                "$2-5 (BTS, songthaews)",
                "$10-20 (Grab, ferries)",
                "$40-80+ (private drivers)",
            ],
            activities: [
                "$5-10 (temples, markets)",
                "$25-50 (island tours, cooking classes)",
                "$100-200+ (private boats, spas)",
            ],
            tips: &[
                "Street food is safe, delicious and cheap",
                "Use Grab instead of negotiating tuk-tuk fares",
                "Night trains save a night of accommodation",
            ],
            tipping: "Not expected but appreciated. Round up or leave 20-50 baht.",
        },
        culture: EtiquetteProfile {
            summary: "Thai culture is shaped by Buddhism and deep respect for the monarchy. Keep calm and smile.",
            etiquette: &[
                "Remove shoes before entering temples and homes",
                "Never touch someone's head",
                "Don't point your feet at people or Buddha images",
            ],
            dress: "Cover shoulders and knees at temples and the Grand Palace",
            greetings: "The wai (palms together, slight bow) and \"Sawasdee\"",
            taboos: &["Disrespecting the monarchy", "Public anger", "Touching monks (women)"],
            customs: &["Songkran water festival", "Morning alms giving", "Spirit houses"],
        },
        safety: SafetyProfile {
            rating: "safe",
            summary: "Thailand is generally safe. Scams and road accidents are the main risks for visitors.",
            concerns: &["Gem and tuk-tuk scams", "Road safety on scooters", "Jet ski damage scams"],
            tips: &["Wear a helmet on scooters", "Ignore strangers saying a sight is closed"],
            police: "191",
            ambulance: "1669",
            tourist: "1155 (Tourist Police)",
            health: &["Drink bottled water", "Use mosquito repellent", "Check dengue advisories"],
        },
        transport: TransportProfile {
            public_transport: "BTS Skytrain and MRT in Bangkok; songthaews in other cities",
            taxis: "Metered taxis and Grab are widely available",
            rentals: "Scooters are popular on islands but require a license",
            walking: "Pleasant in old towns but hot at midday",
            intercity: &["Domestic flights", "Overnight trains", "VIP buses", "Ferries"],
            recommendation: "Fly for long distances; take the night train from Bangkok to Chiang Mai.",
        },
        mistakes: &[
            Mistake {
                mistake: "Riding scooters without experience",
                why: "Road accidents are the top risk",
                instead: "Use Grab or hire a driver",
            },
            Mistake {
                mistake: "Only staying on the islands",
                why: "You miss the north's culture",
                instead: "Add Chiang Mai or Sukhothai",
            },
        ],
        best_for: &[
            TravelerFit {
                kind: "Beach lovers",
                why: "Hundreds of tropical islands",
                highlights: &["Krabi", "Koh Lanta", "Similan Islands"],
            },
            TravelerFit {
                kind: "Budget travelers",
                why: "Great value at every level",
                highlights: &["Street food", "Cheap guesthouses"],
            },
        ],
    },
    CountryProfile {
        code: "ES",
        name: "Spain",
        theme: "spain",
        best_time: "April-June and September-October",
        visa_info: "Schengen area; most nationalities can visit visa-free for 90 days",
        cost: CostProfile {
            budget: DailyRange { min: 55, max: 90 },
            mid_range: DailyRange { min: 130, max: 220 },
            luxury: DailyRange { min: 350, max: 700 },
            accommodation: [
                "$25-55 (hostels, pensiones)",
                "$90-180 (boutique hotels)",
                "$250-600+ (paradores, 5-star)",
            ],
            food: [
                "$15-30 (tapas, menú del día)",
                "$40-70 (restaurants)",
                "$120-250+ (Michelin dining)",
            ],
            transport: [
                "$5-10 (metro, buses)",
                "$20-60 (AVE trains)",
                "$80-150+ (first class, taxis)",
            ],
            activities: [
                "$5-15 (free museum hours)",
                "$25-50 (Sagrada Família, Alhambra)",
                "$100-200+ (private tours)",
            ],
            tips: &[
                "The menú del día lunch is the best deal",
                "Book the Alhambra weeks in advance",
            ],
            tipping: "Not expected. Leaving small change is common.",
        },
        culture: EtiquetteProfile {
            summary: "Spanish life runs late and social. Meals are long and evenings start after 9pm.",
            etiquette: &["Greet with two kisses among friends", "Don't rush meals", "Dinner is rarely before 9pm"],
            dress: "Casual but neat. Cover up away from the beach.",
            greetings: "\"Hola\" (hello), \"Gracias\" (thank you)",
            taboos: &["Beachwear in city streets", "Confusing Catalan and Spanish identity"],
            customs: &["Siesta closures", "Tapas hopping", "Local fiestas"],
        },
        safety: SafetyProfile {
            rating: "safe",
            summary: "Spain is safe, though pickpocketing is widespread in Barcelona and Madrid.",
            concerns: &["Pickpockets on Las Ramblas and the metro", "Distraction thefts"],
            tips: &["Keep phones off café tables", "Use a cross-body bag"],
            police: "091",
            ambulance: "061",
            tourist: "112",
            health: &["Tap water is safe", "Strong summer sun inland"],
        },
        transport: TransportProfile {
            public_transport: "Excellent metros in Madrid and Barcelona",
            taxis: "Metered taxis are affordable",
            rentals: "Best for Andalusia's white villages",
            walking: "Old towns are compact and lively",
            intercity: &["AVE high-speed trains", "ALSA buses", "Domestic flights"],
            recommendation: "AVE connects Madrid to Barcelona and Seville in about 2.5 hours.",
        },
        mistakes: &[Mistake {
            mistake: "Eating dinner at 6pm",
            why: "Restaurants will be empty or closed",
            instead: "Have tapas late afternoon and dine after 9pm",
        }],
        best_for: &[TravelerFit {
            kind: "Nightlife lovers",
            why: "Late nights and lively plazas",
            highlights: &["Madrid", "Barcelona", "Ibiza"],
        }],
    },
    CountryProfile {
        code: "MX",
        name: "Mexico",
        theme: "mexico",
        best_time: "December to April, the dry season",
        visa_info: "Visa-free for up to 180 days for many nationalities",
        cost: CostProfile {
            budget: DailyRange { min: 35, max: 60 },
            mid_range: DailyRange { min: 90, max: 160 },
            luxury: DailyRange { min: 300, max: 600 },
            accommodation: [
                "$12-30 (hostels, posadas)",
                "$60-120 (boutique hotels)",
                "$250-500+ (resorts)",
            ],
            food: [
                "$8-15 (street tacos, markets)",
                "$25-45 (restaurants)",
                "$80-150+ (tasting menus)",
            ],
            transport: [
                "$2-8 (metro, colectivos)",
                "$15-30 (ADO buses, Uber)",
                "$60-120+ (private drivers)",
            ],
            activities: [
                "$5-10 (ruins, museums)",
                "$30-60 (cenote tours)",
                "$120-250+ (private excursions)",
            ],
            tips: &["Pay in pesos rather than dollars", "ADO first-class buses are comfortable and cheap"],
            tipping: "10-15% at restaurants; tip guides and hotel staff.",
        },
        culture: EtiquetteProfile {
            summary: "Mexican culture is warm, family-centered and proud of its indigenous and colonial heritage.",
            etiquette: &["Greet everyone when entering a room", "Say \"provecho\" to diners"],
            dress: "Casual; cover up in churches and rural areas",
            greetings: "\"Buenos días\" (good morning), a handshake or cheek kiss",
            taboos: &["Calling Americans \"Americans\" exclusively", "Refusing food offered in a home"],
            customs: &["Día de Muertos", "Late lunches as the main meal"],
        },
        safety: SafetyProfile {
            rating: "moderate",
            summary: "Tourist areas are generally safe, but some regions carry government travel warnings.",
            concerns: &["Regional cartel violence", "Express kidnappings in taxis", "Petty theft"],
            tips: &["Use app-based taxis", "Check state-level advisories", "Avoid driving at night"],
            police: "911",
            ambulance: "911",
            tourist: "078 (Angeles Verdes)",
            health: &["Don't drink tap water", "Watch out for altitude in Mexico City"],
        },
        transport: TransportProfile {
            public_transport: "Mexico City has an extensive, cheap metro",
            taxis: "Use Uber, DiDi or sitio taxis",
            rentals: "Good for the Yucatán peninsula",
            walking: "Historic centers are walkable",
            intercity: &["ADO buses", "Domestic flights"],
            recommendation: "Fly between regions; use ADO buses within the Yucatán.",
        },
        mistakes: &[Mistake {
            mistake: "Hailing taxis on the street",
            why: "Unlicensed taxis carry risks",
            instead: "Use ride-hailing apps or official sitios",
        }],
        best_for: &[TravelerFit {
            kind: "Food lovers",
            why: "UNESCO-listed cuisine",
            highlights: &["Oaxaca mole", "Street tacos", "Mezcal"],
        }],
    },
    CountryProfile {
        code: "IN",
        name: "India",
        theme: "india",
        best_time: "October to March",
        visa_info: "E-visa available for most nationalities",
        cost: CostProfile {
            budget: DailyRange { min: 20, max: 40 },
            mid_range: DailyRange { min: 60, max: 120 },
            luxury: DailyRange { min: 250, max: 600 },
            accommodation: [
                "$8-20 (hostels, guesthouses)",
                "$40-90 (heritage havelis)",
                "$200-500+ (palace hotels)",
            ],
            food: [
                "$3-8 (thalis, street food)",
                "$15-30 (restaurants)",
                "$60-120+ (hotel dining)",
            ],
            transport: [
                "$2-5 (metro, auto-rickshaws)",
                "$10-25 (AC trains, Uber)",
                "$50-100+ (private car and driver)",
            ],
            activities: [
                "$5-10 (temples, forts)",
                "$20-40 (monument tickets, tours)",
                "$100-200+ (safaris, private guides)",
            ],
            tips: &["Book trains early on IRCTC", "Hiring a car and driver is affordable"],
            tipping: "10% at restaurants; small tips for drivers and guides.",
        },
        culture: EtiquetteProfile {
            summary: "India is vast and diverse, with strong religious traditions and warm hospitality.",
            etiquette: &["Remove shoes in temples and homes", "Eat with your right hand", "Dress modestly"],
            dress: "Cover shoulders and legs, especially at religious sites",
            greetings: "\"Namaste\" with palms together",
            taboos: &["Public displays of affection", "Touching things with your feet", "Beef in Hindu areas"],
            customs: &["Festivals like Diwali and Holi", "Head covering in gurdwaras"],
        },
        safety: SafetyProfile {
            rating: "moderate",
            summary: "Most visits are trouble-free, but scams, traffic and harassment require vigilance.",
            concerns: &["Touts and scams at stations", "Traffic", "Harassment of women travelers"],
            tips: &["Use prepaid taxi booths", "Dress conservatively", "Keep copies of your passport"],
            police: "100",
            ambulance: "102",
            tourist: "1363 (Tourist Helpline)",
            health: &["Drink bottled or filtered water", "Check malaria advice", "Pack stomach medication"],
        },
        transport: TransportProfile {
            public_transport: "Modern metros in Delhi, Mumbai and Bangalore",
            taxis: "Uber, Ola and auto-rickshaws",
            rentals: "Self-drive is not recommended; hire a driver",
            walking: "Chaotic streets; take care crossing",
            intercity: &["Indian Railways", "Domestic flights", "Private car with driver"],
            recommendation: "Book AC train classes for comfort; fly for long distances.",
        },
        mistakes: &[Mistake {
            mistake: "Overpacking the itinerary",
            why: "Distances and traffic are large",
            instead: "Focus on one or two regions",
        }],
        best_for: &[TravelerFit {
            kind: "Spiritual travelers",
            why: "Sacred sites across many faiths",
            highlights: &["Varanasi", "Rishikesh", "Golden Temple"],
        }],
    },
];
